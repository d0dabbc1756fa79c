//! API data models
//!
//! Response bodies that are not domain entities. Successful explanations are
//! serialized straight from `CodeExplanation`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body shared by validation failures, internal failures and catchers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable problem description
    pub message: String,
    /// Canonical names of the accepted languages, on language rejections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_languages: Option<Vec<String>>,
    /// Error detail, on internal failures when exposure is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Failure time, on internal failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ErrorResponse {
    /// Body carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            supported_languages: None,
            error: None,
            timestamp: None,
        }
    }

    /// Language rejection body
    pub fn unsupported_language(message: impl Into<String>, supported: Vec<String>) -> Self {
        Self {
            supported_languages: Some(supported),
            ..Self::message(message)
        }
    }

    /// Internal failure body
    pub fn internal(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            error,
            timestamp: Some(Utc::now()),
            ..Self::message(message)
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Fixed greeting
    pub message: String,
    /// Server version
    pub version: String,
    /// Active remote provider, or `disabled`
    pub remote_model: String,
}
