use super::*;

#[test]
fn resolve_falls_back_to_development_default() {
    assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
}

#[test]
fn resolve_uses_compiled_value_when_no_runtime_override() {
    assert_eq!(
        resolve_base_url(None, Some("https://api.fedmind.example")),
        "https://api.fedmind.example"
    );
}

#[test]
fn resolve_prefers_runtime_override() {
    assert_eq!(
        resolve_base_url(
            Some("https://staging.fedmind.example".to_owned()),
            Some("https://api.fedmind.example"),
        ),
        "https://staging.fedmind.example"
    );
}

#[test]
fn resolve_ignores_blank_values() {
    assert_eq!(
        resolve_base_url(Some("   ".to_owned()), Some("")),
        DEFAULT_BASE_URL
    );
}

#[test]
fn resolve_strips_trailing_slashes() {
    assert_eq!(
        resolve_base_url(Some("https://api.fedmind.example/".to_owned()), None),
        "https://api.fedmind.example"
    );
}

#[test]
fn default_config_targets_localhost() {
    assert_eq!(ApiConfig::default().base_url, "http://localhost:8000");
}

#[test]
fn new_accepts_any_base_url() {
    let config = ApiConfig::new("https://api.fedmind.example");
    assert_eq!(config.base_url, "https://api.fedmind.example");
}
