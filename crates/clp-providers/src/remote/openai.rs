//! OpenAI Explanation Provider
//!
//! Implements the RemoteExplanationProvider port using the OpenAI chat
//! completions API (or any compatible endpoint).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use clp_domain::error::{Error, Result};
use clp_domain::ports::providers::RemoteExplanationProvider;
use clp_domain::value_objects::ExplanationPrompt;

use crate::constants::{
    CONTENT_TYPE_JSON, OPENAI_DEFAULT_BASE_URL, OPENAI_MAX_TOKENS, OPENAI_TEMPERATURE,
};
use crate::remote::helpers::constructor;
use crate::utils::{HttpResponseUtils, JsonExt};

/// OpenAI explanation provider
///
/// Sends the tutoring prompt as a chat completion with a tutor system
/// message. Receives HTTP client via constructor injection.
pub struct OpenAIExplanationProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIExplanationProvider {
    /// Create a new OpenAI explanation provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to `https://api.openai.com`)
    /// * `model` - Model name (e.g., "gpt-3.5-turbo")
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

    /// Get the base URL for this provider
    pub fn base_url(&self) -> String {
        constructor::get_effective_url(self.base_url.as_deref(), OPENAI_DEFAULT_BASE_URL)
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send chat completion request and get response data
    async fn chat_completion(&self, prompt: &ExplanationPrompt) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system_instruction() },
                { "role": "user", "content": prompt.render() }
            ],
            "max_tokens": OPENAI_MAX_TOKENS,
            "temperature": OPENAI_TEMPERATURE
        });

        let response = self
            .http_client
            .post(format!("{}/v1/chat/completions", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(&e, "OpenAI", self.timeout))?;

        HttpResponseUtils::check_and_parse(response, "OpenAI").await
    }
}

#[async_trait]
impl RemoteExplanationProvider for OpenAIExplanationProvider {
    async fn explain(&self, prompt: &ExplanationPrompt) -> Result<String> {
        let body = self.chat_completion(prompt).await?;

        body.text_at("/choices/0/message/content")
            .map(str::to_string)
            .ok_or_else(|| {
                Error::remote_model("OpenAI response did not contain explanation text")
            })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
