//! Application Service Port Interfaces
//!
//! Defines the port interfaces for application layer services.

use async_trait::async_trait;
use clp_domain::entities::CodeExplanation;
use clp_domain::error::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// Explanation Request
// ============================================================================

/// Raw explanation request as received from a caller
///
/// Both fields are optional so that missing values surface as validation
/// errors instead of decoding failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationRequest {
    /// Source snippet; must be non-empty after trimming
    pub code: Option<String>,
    /// Declared language; validated against the allow-list
    pub language: Option<String>,
    /// Skip the remote model and go straight to local analysis
    #[serde(default)]
    pub offline: bool,
}

impl ExplanationRequest {
    /// Create a request from code and language
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            language: Some(language.into()),
            offline: false,
        }
    }

    /// Disable the remote model for this request
    #[must_use]
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }
}

// ============================================================================
// Explanation Service Interface
// ============================================================================

/// Explanation Service Interface
///
/// Orchestrates validation, the optional remote model and the local
/// fallback. The only errors returned are validation errors (see
/// `Error::is_validation`) and internal analysis defects; remote failures
/// never surface.
#[async_trait]
pub trait ExplanationServiceInterface: Send + Sync {
    /// Explain the requested code
    async fn explain(&self, request: ExplanationRequest) -> Result<CodeExplanation>;

    /// Name of the configured remote model provider, if any
    fn remote_provider_name(&self) -> Option<String>;
}
