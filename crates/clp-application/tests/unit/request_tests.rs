//! Tests for the explanation request payload

use clp_application::ports::ExplanationRequest;

#[test]
fn test_request_decodes_with_missing_fields() {
    let request: ExplanationRequest = serde_json::from_str(r#"{"code":"x = 1"}"#).expect("decode");
    assert_eq!(request.code.as_deref(), Some("x = 1"));
    assert_eq!(request.language, None);
    assert!(!request.offline);
}

#[test]
fn test_request_decodes_offline_flag() {
    let request: ExplanationRequest =
        serde_json::from_str(r#"{"code":"x","language":"c","offline":true}"#).expect("decode");
    assert!(request.offline);
    assert_eq!(request, ExplanationRequest::new("x", "c").offline());
}
