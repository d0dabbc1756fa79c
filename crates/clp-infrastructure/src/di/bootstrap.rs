//! Application bootstrap
//!
//! Builds the [`AppContext`] shared by the HTTP server and the CLI.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clp_infrastructure::{AppConfig, init_app};
//!
//! # async fn run() -> clp_domain::error::Result<()> {
//! let context = init_app(AppConfig::default()).await?;
//! let service = context.explanation_service();
//! # let _ = service;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use clp_application::domain_services::CodeAnalyzer;
use clp_application::ports::services::ExplanationServiceInterface;
use clp_application::use_cases::ExplanationServiceImpl;
use clp_domain::error::Result;
use clp_domain::ports::RemoteExplanationProvider;
use clp_providers::analysis::PatternAnalyzer;
use tracing::info;

use crate::config::AppConfig;
use crate::di::resolver::resolve_remote_provider;
use crate::utils::TimedOperation;

/// Application context
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    explanation_service: Arc<dyn ExplanationServiceInterface>,
    remote_provider: Option<Arc<dyn RemoteExplanationProvider>>,
}

impl AppContext {
    /// Explanation use case
    pub fn explanation_service(&self) -> Arc<dyn ExplanationServiceInterface> {
        Arc::clone(&self.explanation_service)
    }

    /// Name of the active remote provider, `None` when running locally only
    pub fn remote_provider_name(&self) -> Option<&str> {
        self.remote_provider
            .as_deref()
            .map(RemoteExplanationProvider::provider_name)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("remote", &self.remote_provider_name())
            .field("server", &self.config.server.address())
            .finish_non_exhaustive()
    }
}

/// Initialize the application context from configuration
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let timer = TimedOperation::start();
    let config = Arc::new(config);

    let analyzer: Arc<dyn CodeAnalyzer> = Arc::new(PatternAnalyzer::new());
    let remote_provider = resolve_remote_provider(&config.remote)?;

    let explanation_service: Arc<dyn ExplanationServiceInterface> =
        Arc::new(ExplanationServiceImpl::new(
            analyzer,
            remote_provider.clone(),
            config.remote.timeout(),
        ));

    info!(
        remote = remote_provider
            .as_deref()
            .map_or("none", RemoteExplanationProvider::provider_name),
        elapsed_ms = timer.elapsed_ms(),
        "Application context initialized"
    );

    Ok(AppContext {
        config,
        explanation_service,
        remote_provider,
    })
}

/// Initialize a local-only application for testing
pub async fn init_test_app() -> Result<AppContext> {
    let mut config = AppConfig::default();
    config.remote.provider = crate::config::RemoteProviderKind::None;
    init_app(config).await
}
