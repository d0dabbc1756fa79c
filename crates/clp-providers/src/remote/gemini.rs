//! Gemini Explanation Provider
//!
//! Implements the RemoteExplanationProvider port using Google's Gemini
//! `generateContent` API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use clp_domain::error::{Error, Result};
use clp_domain::ports::providers::RemoteExplanationProvider;
use clp_domain::value_objects::ExplanationPrompt;

use crate::constants::{CONTENT_TYPE_JSON, GEMINI_DEFAULT_BASE_URL};
use crate::remote::helpers::constructor;
use crate::utils::{HttpResponseUtils, JsonExt};

/// Gemini explanation provider
///
/// Receives HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use clp_providers::remote::GeminiExplanationProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = GeminiExplanationProvider::new(
///         "AIza-your-api-key".to_string(),
///         None,
///         "gemini-2.0-flash".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct GeminiExplanationProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GeminiExplanationProvider {
    /// Create a new Gemini explanation provider
    ///
    /// # Arguments
    /// * `api_key` - Google AI API key
    /// * `base_url` - Optional custom base URL (defaults to Google AI API)
    /// * `model` - Model name (e.g., "gemini-2.0-flash")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let api_key = constructor::validate_api_key(&api_key);
        let base_url = constructor::validate_url(base_url);
        Self {
            api_key,
            base_url,
            model,
            timeout,
            http_client,
        }
    }

    /// Get the effective base URL
    pub fn base_url(&self) -> String {
        constructor::get_effective_url(self.base_url.as_deref(), GEMINI_DEFAULT_BASE_URL)
    }

    /// Get the model name for API calls (remove prefix if present)
    pub fn api_model_name(&self) -> &str {
        self.model.strip_prefix("models/").unwrap_or(&self.model)
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the prompt and return the raw response body
    async fn generate_content(&self, text: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "contents": [{ "parts": [{ "text": text }] }]
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url(),
            self.api_model_name()
        );

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(&e, "Gemini", self.timeout))?;

        HttpResponseUtils::check_and_parse(response, "Gemini").await
    }
}

#[async_trait]
impl RemoteExplanationProvider for GeminiExplanationProvider {
    async fn explain(&self, prompt: &ExplanationPrompt) -> Result<String> {
        let body = self.generate_content(&prompt.render()).await?;

        body.text_at("/candidates/0/content/parts/0/text")
            .map(str::to_string)
            .ok_or_else(|| {
                Error::remote_model("Gemini response did not contain explanation text")
            })
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}
