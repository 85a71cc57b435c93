use super::*;

#[test]
fn nothing_renders_before_the_first_submission() {
    assert_eq!(display_mode(false, false, false), DisplayMode::Empty);
}

#[test]
fn first_request_in_flight_shows_the_placeholder() {
    assert_eq!(display_mode(true, false, false), DisplayMode::Placeholder);
}

#[test]
fn existing_result_stays_visible_during_a_resubmit() {
    assert_eq!(display_mode(true, true, false), DisplayMode::Result);
}

#[test]
fn settled_error_replaces_the_card() {
    assert_eq!(display_mode(false, false, true), DisplayMode::Error);
    assert_eq!(display_mode(false, true, true), DisplayMode::Error);
}

#[test]
fn settled_result_renders_the_card() {
    assert_eq!(display_mode(false, true, false), DisplayMode::Result);
}
