//! Remote provider resolution
//!
//! Turns `[remote]` configuration into a provider instance, or `None` when
//! the deployment should run on local analysis alone.

use std::sync::Arc;

use clp_domain::error::{Error, Result};
use clp_domain::ports::RemoteExplanationProvider;
use clp_providers::http::{HttpClientConfig, create_http_client};
use clp_providers::remote::{mask_api_key, usable_api_key};
use tracing::{info, warn};

use crate::config::{RemoteConfig, RemoteProviderKind};

/// Build the configured remote provider
///
/// Returns `Ok(None)` for `provider = "none"` and for missing or placeholder
/// keys. Errors only when the HTTP client cannot be built or the provider
/// was compiled out.
pub fn resolve_remote_provider(
    config: &RemoteConfig,
) -> Result<Option<Arc<dyn RemoteExplanationProvider>>> {
    if config.provider == RemoteProviderKind::None {
        info!("Remote model disabled, using local analysis only");
        return Ok(None);
    }

    let Some(api_key) = usable_api_key(config.api_key.as_deref()) else {
        warn!(
            provider = %config.provider,
            "No usable API key configured, using local analysis only"
        );
        return Ok(None);
    };

    let model = config.effective_model().unwrap_or_default();
    let http_client = create_http_client(&HttpClientConfig::with_timeout(config.timeout()))?;

    info!(
        provider = %config.provider,
        model = %model,
        api_key = %mask_api_key(&api_key),
        "Remote model configured"
    );

    build_provider(config, api_key, model, http_client).map(Some)
}

fn build_provider(
    config: &RemoteConfig,
    api_key: String,
    model: String,
    http_client: reqwest::Client,
) -> Result<Arc<dyn RemoteExplanationProvider>> {
    match config.provider {
        #[cfg(feature = "remote-gemini")]
        RemoteProviderKind::Gemini => Ok(Arc::new(
            clp_providers::remote::GeminiExplanationProvider::new(
                api_key,
                config.base_url.clone(),
                model,
                config.timeout(),
                http_client,
            ),
        )),
        #[cfg(feature = "remote-openai")]
        RemoteProviderKind::OpenAI => Ok(Arc::new(
            clp_providers::remote::OpenAIExplanationProvider::new(
                api_key,
                config.base_url.clone(),
                model,
                config.timeout(),
                http_client,
            ),
        )),
        other => {
            let _ = (api_key, model, http_client);
            Err(Error::configuration(format!(
                "Remote provider '{other}' is not available in this build"
            )))
        }
    }
}
