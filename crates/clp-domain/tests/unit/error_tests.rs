//! Unit tests for the domain error type

use clp_domain::constants::MESSAGE_UNSUPPORTED_LANGUAGE;
use clp_domain::{Error, SupportedLanguage};

#[test]
fn test_error_display() {
    assert_eq!(
        Error::invalid_argument("Code is required").to_string(),
        "Invalid argument: Code is required"
    );
    assert_eq!(
        Error::remote_model("status 429").to_string(),
        "Remote model error: status 429"
    );
    assert_eq!(
        Error::configuration("port must not be 0").to_string(),
        "Configuration error: port must not be 0"
    );
}

#[test]
fn test_language_rejection_converts_to_error() {
    let rejection = SupportedLanguage::validate(Some("ruby")).unwrap_err();
    let error: Error = rejection.into();

    match &error {
        Error::UnsupportedLanguage { message, supported } => {
            assert_eq!(message, MESSAGE_UNSUPPORTED_LANGUAGE);
            assert_eq!(supported.first().map(String::as_str), Some("C"));
            assert_eq!(supported.last().map(String::as_str), Some("C++"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(error.is_validation());
    assert_eq!(error.user_message(), MESSAGE_UNSUPPORTED_LANGUAGE);
}

#[test]
fn test_is_validation_classification() {
    assert!(Error::invalid_argument("Code is required").is_validation());
    assert!(!Error::remote_model("timeout").is_validation());
    assert!(!Error::internal("boom").is_validation());
}
