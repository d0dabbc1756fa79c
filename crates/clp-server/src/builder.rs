//! Server Builder
//!
//! Assembles the Rocket instance from an explanation service and the
//! `[server]` configuration.

use std::sync::Arc;

use clp_application::ports::services::ExplanationServiceInterface;
use clp_infrastructure::config::ServerConfig;
use rocket::{Build, Rocket, routes};

use crate::catchers::json_catchers;
use crate::constants::API_BASE;
use crate::cors::{Cors, preflight};
use crate::handlers::{ApiState, explain_code, health};

/// Builder for the HTTP API
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use clp_application::use_cases::ExplanationServiceImpl;
/// use clp_providers::analysis::PatternAnalyzer;
/// use clp_server::ServerBuilder;
///
/// let service = ExplanationServiceImpl::local_only(Arc::new(PatternAnalyzer::new()));
/// let rocket = ServerBuilder::new()
///     .with_explanation_service(Arc::new(service))
///     .build();
/// assert!(rocket.is_ok());
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    explanation_service: Option<Arc<dyn ExplanationServiceInterface>>,
    server: ServerConfig,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explanation service
    pub fn with_explanation_service(
        mut self,
        service: Arc<dyn ExplanationServiceInterface>,
    ) -> Self {
        self.explanation_service = Some(service);
        self
    }

    /// Apply `[server]` settings (bind address, CORS, error exposure)
    pub fn with_server_config(mut self, server: ServerConfig) -> Self {
        self.server = server;
        self
    }

    /// Build the Rocket application
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` when no explanation service
    /// was provided.
    pub fn build(self) -> Result<Rocket<Build>, BuilderError> {
        let explanation_service = self
            .explanation_service
            .ok_or(BuilderError::MissingDependency("explanation service"))?;

        let state = ApiState {
            explanation_service,
            expose_errors: self.server.expose_errors,
        };

        let figment = rocket::Config::figment()
            .merge(("address", self.server.host.clone()))
            .merge(("port", self.server.port));

        let mut rocket = rocket::custom(figment)
            .manage(state)
            .mount(API_BASE, routes![explain_code, health::health])
            .register("/", json_catchers());

        if self.server.cors_enabled {
            rocket = rocket.attach(Cors).mount("/", routes![preflight]);
        }

        Ok(rocket)
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
