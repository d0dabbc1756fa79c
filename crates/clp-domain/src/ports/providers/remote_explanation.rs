use crate::error::Result;
use crate::value_objects::ExplanationPrompt;
use async_trait::async_trait;

/// Remote Explanation Model
///
/// A hosted language model that can explain a snippet. Callers treat every
/// error from this port the same way: the explanation falls back to local
/// pattern analysis.
///
/// # Example
///
/// ```ignore
/// use clp_domain::ports::providers::RemoteExplanationProvider;
/// use clp_domain::{ExplanationPrompt, SupportedLanguage};
///
/// let prompt = ExplanationPrompt::new("print('hi')", SupportedLanguage::Python);
/// match provider.explain(&prompt).await {
///     Ok(text) => println!("{text}"),
///     Err(e) => tracing::warn!(provider = provider.provider_name(), error = %e),
/// }
/// ```
#[async_trait]
pub trait RemoteExplanationProvider: Send + Sync {
    /// Ask the model to explain the prompt's code
    ///
    /// # Returns
    /// The model's non-empty answer text, or `Error::RemoteModel` on any
    /// transport, status, quota or payload failure
    async fn explain(&self, prompt: &ExplanationPrompt) -> Result<String>;

    /// Get the name/identifier of this provider (e.g., "gemini", "openai", "null")
    fn provider_name(&self) -> &str;
}
