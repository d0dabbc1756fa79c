//! Remote explanation model configuration types

use std::time::Duration;

use clp_domain::constants::REMOTE_TIMEOUT_SECS_DEFAULT;
use clp_providers::constants::{GEMINI_DEFAULT_MODEL, OPENAI_DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

use crate::constants::{GEMINI_API_KEY_ENV, OPENAI_API_KEY_ENV};

/// Which hosted model explains code before the local fallback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteProviderKind {
    /// Google Gemini `generateContent`
    #[default]
    Gemini,
    /// OpenAI-compatible chat completions
    OpenAI,
    /// Local analysis only
    None,
}

impl RemoteProviderKind {
    /// Provider identifier used in logs and the health endpoint
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
            Self::None => "none",
        }
    }

    /// Model used when none is configured
    pub fn default_model(self) -> Option<&'static str> {
        match self {
            Self::Gemini => Some(GEMINI_DEFAULT_MODEL),
            Self::OpenAI => Some(OPENAI_DEFAULT_MODEL),
            Self::None => None,
        }
    }

    /// Conventional environment variable holding this provider's key
    pub fn api_key_env(self) -> Option<&'static str> {
        match self {
            Self::Gemini => Some(GEMINI_API_KEY_ENV),
            Self::OpenAI => Some(OPENAI_API_KEY_ENV),
            Self::None => None,
        }
    }
}

impl std::fmt::Display for RemoteProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote explanation model configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Provider to call
    pub provider: RemoteProviderKind,
    /// API key; empty or placeholder keys disable the remote path
    pub api_key: Option<String>,
    /// Model name override
    pub model: Option<String>,
    /// Base URL override
    pub base_url: Option<String>,
    /// Upper bound for one remote call, in seconds; must not be 0
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            provider: RemoteProviderKind::default(),
            api_key: None,
            model: None,
            base_url: None,
            timeout_secs: REMOTE_TIMEOUT_SECS_DEFAULT,
        }
    }
}

impl RemoteConfig {
    /// Remote call timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured model, else the provider's default
    pub fn effective_model(&self) -> Option<String> {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|model| !model.is_empty())
            .map(str::to_string)
            .or_else(|| self.provider.default_model().map(str::to_string))
    }
}
