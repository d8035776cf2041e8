use super::*;

// =============================================================
// Error body extraction
// =============================================================

#[test]
fn error_message_prefers_body_message() {
    let msg = error_message(401, r#"{"message":"Invalid API key"}"#);
    assert_eq!(msg, "Invalid API key");
}

#[test]
fn error_message_falls_back_to_status_on_bad_json() {
    let msg = error_message(502, "<html>Bad Gateway</html>");
    assert_eq!(msg, "Request failed with status 502");
}

#[test]
fn error_message_falls_back_when_message_field_missing() {
    let msg = error_message(404, r#"{"error":"not found"}"#);
    assert_eq!(msg, "Request failed with status 404");
}
