//! `GET /api/health`

use rocket::State;
use rocket::get;
use rocket::serde::json::Json;

use super::ApiState;
use crate::constants::{MESSAGE_HEALTH, REMOTE_MODEL_DISABLED};
use crate::models::HealthResponse;

/// Health check endpoint
#[get("/health")]
pub fn health(state: &State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: MESSAGE_HEALTH.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        remote_model: state
            .explanation_service
            .remote_provider_name()
            .unwrap_or_else(|| REMOTE_MODEL_DISABLED.to_string()),
    })
}
