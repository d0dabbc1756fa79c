//! Request handlers

pub mod explain;
pub mod health;

use std::sync::Arc;

use clp_application::ports::services::ExplanationServiceInterface;

pub use explain::explain_code;

/// Shared state managed by Rocket
#[derive(Clone)]
pub struct ApiState {
    /// Explanation use case
    pub explanation_service: Arc<dyn ExplanationServiceInterface>,
    /// Include error detail in 500 responses
    pub expose_errors: bool,
}
