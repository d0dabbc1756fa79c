//! Null explanation provider for local-only deployments and tests

use async_trait::async_trait;

use clp_domain::error::{Error, Result};
use clp_domain::ports::providers::RemoteExplanationProvider;
use clp_domain::value_objects::ExplanationPrompt;

/// Remote provider that always fails
///
/// Every call returns `Error::RemoteModel`, so the explanation service
/// always takes the local analysis path.
///
/// # Example
///
/// ```rust
/// use clp_providers::remote::NullExplanationProvider;
/// use clp_providers::RemoteExplanationProvider;
///
/// let provider = NullExplanationProvider::new();
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NullExplanationProvider;

impl NullExplanationProvider {
    /// Create a new null explanation provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RemoteExplanationProvider for NullExplanationProvider {
    async fn explain(&self, _prompt: &ExplanationPrompt) -> Result<String> {
        Err(Error::remote_model("remote model disabled"))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
