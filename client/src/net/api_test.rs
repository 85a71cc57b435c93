use super::*;

#[test]
fn predict_endpoint_joins_base_url() {
    assert_eq!(
        predict_endpoint("http://localhost:8000"),
        "http://localhost:8000/predict"
    );
}

#[test]
fn compare_endpoint_joins_base_url() {
    assert_eq!(
        compare_endpoint("https://api.fedmind.example"),
        "https://api.fedmind.example/compare"
    );
}

#[test]
fn status_error_extracts_server_detail() {
    let error = status_error(500, r#"{"detail":"Model LR_eps0.1 not found"}"#);
    assert_eq!(
        error.to_string(),
        "server returned status 500: Model LR_eps0.1 not found"
    );
}

#[test]
fn status_error_falls_back_on_non_json_bodies() {
    let error = status_error(502, "<html>Bad Gateway</html>");
    assert_eq!(error.to_string(), "server returned status 502: request failed");
}

#[test]
fn status_error_falls_back_on_missing_detail() {
    let error = status_error(500, r#"{"message":"boom"}"#);
    assert_eq!(error.to_string(), "server returned status 500: request failed");
}

#[test]
fn transport_error_display() {
    let error = ApiError::Transport("connection refused".to_owned());
    assert_eq!(error.to_string(), "request failed: connection refused");
}

#[test]
fn decode_error_display() {
    let error = ApiError::Decode("missing field `prediction`".to_owned());
    assert_eq!(
        error.to_string(),
        "invalid response body: missing field `prediction`"
    );
}
