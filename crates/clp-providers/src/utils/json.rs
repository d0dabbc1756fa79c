//! JSON Value Extension
//!
//! Accessors for pulling answer text out of nested provider payloads.

/// Extension trait for `serde_json::Value`
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use clp_providers::utils::JsonExt;
///
/// let body = json!({"choices": [{"message": {"content": " Hi "}}]});
/// assert_eq!(body.str_at("/choices/0/message/content"), Some(" Hi "));
/// assert_eq!(body.text_at("/choices/0/message/content"), Some("Hi"));
/// assert_eq!(body.text_at("/choices/1/message/content"), None);
/// ```
pub trait JsonExt {
    /// String at a JSON pointer, if present
    fn str_at(&self, pointer: &str) -> Option<&str>;

    /// Trimmed, non-empty string at a JSON pointer
    fn text_at(&self, pointer: &str) -> Option<&str>;
}

impl JsonExt for serde_json::Value {
    #[inline]
    fn str_at(&self, pointer: &str) -> Option<&str> {
        self.pointer(pointer).and_then(serde_json::Value::as_str)
    }

    #[inline]
    fn text_at(&self, pointer: &str) -> Option<&str> {
        self.str_at(pointer)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
