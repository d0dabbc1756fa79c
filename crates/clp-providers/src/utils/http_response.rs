//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use clp_domain::error::{Error, Result};
use reqwest::Response;

/// Format error message for remote model provider
fn remote_error(provider: &str, context: &str, details: &str) -> Error {
    Error::remote_model(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by remote providers.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => remote_error(provider_name, "authentication failed", &error_text),
                429 => remote_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => remote_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => remote_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| remote_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Map a transport error, distinguishing timeouts
    pub fn transport_error(
        error: &reqwest::Error,
        provider_name: &str,
        timeout: std::time::Duration,
    ) -> Error {
        if error.is_timeout() {
            Error::remote_model(format!(
                "{provider_name} {} {timeout:?}",
                crate::constants::ERROR_MSG_REQUEST_TIMEOUT
            ))
        } else {
            remote_error(provider_name, "HTTP request failed", &error.to_string())
        }
    }
}
