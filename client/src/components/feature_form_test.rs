use super::*;

#[test]
fn submit_label_shows_progress_while_loading() {
    assert_eq!(submit_button_label(true, false), "Processing...");
    assert_eq!(submit_button_label(true, true), "Processing...");
}

#[test]
fn submit_label_names_the_selected_action() {
    assert_eq!(submit_button_label(false, false), "Predict");
    assert_eq!(submit_button_label(false, true), "Compare All Models");
}

#[test]
fn input_types_follow_field_kind() {
    assert_eq!(input_type(FieldKind::Number), "number");
    assert_eq!(input_type(FieldKind::Date), "date");
    assert_eq!(input_type(FieldKind::Text), "text");
}

#[test]
fn option_text_pairs_code_and_meaning() {
    let gender = schema::catalog::find("gender").unwrap();
    assert_eq!(option_text(&gender.options[0]), "0: Male");
    assert_eq!(option_text(&gender.options[2]), "2: Other");
}
