//! Common helpers for remote explanation providers
//!
//! Shared functionality used across the remote model adapters.

use crate::constants::{API_KEY_VISIBLE_PREFIX, PLACEHOLDER_KEY_PREFIX, PLACEHOLDER_KEY_SUFFIX};

/// Common constructor patterns used by remote providers
pub mod constructor {
    /// Template for validating and normalizing API keys
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Template for validating and normalizing URLs; blank becomes `None`
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(|url| url.trim().to_string())
            .unwrap_or_else(|| default_url.to_string())
    }
}

/// Whether `key` is a sample-config placeholder such as `your-gemini-api-key-here`
pub fn is_placeholder_key(key: &str) -> bool {
    let key = key.trim().to_ascii_lowercase();
    key.starts_with(PLACEHOLDER_KEY_PREFIX) && key.ends_with(PLACEHOLDER_KEY_SUFFIX)
}

/// The key, trimmed, when it is neither empty nor a placeholder
pub fn usable_api_key(key: Option<&str>) -> Option<String> {
    key.map(str::trim)
        .filter(|k| !k.is_empty() && !is_placeholder_key(k))
        .map(str::to_string)
}

/// Masked form of a key for logs (`AIza****`)
pub fn mask_api_key(key: &str) -> String {
    let visible: String = key.chars().take(API_KEY_VISIBLE_PREFIX).collect();
    format!("{visible}****")
}
