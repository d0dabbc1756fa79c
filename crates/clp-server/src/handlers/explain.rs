//! `POST /api/explain-code`

use clp_application::ports::services::ExplanationRequest;
use clp_domain::entities::CodeExplanation;
use clp_domain::error::Error;
use rocket::State;
use rocket::http::Status;
use rocket::post;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use tracing::error;

use super::ApiState;
use crate::constants::MESSAGE_EXPLANATION_FAILED;
use crate::models::ErrorResponse;

/// Error half of the explain response
pub type ApiError = Custom<Json<ErrorResponse>>;

/// Explain a code snippet
///
/// Validation failures answer 400; anything else the service reports is an
/// internal failure and answers 500.
#[post("/explain-code", data = "<request>")]
pub async fn explain_code(
    state: &State<ApiState>,
    request: Json<ExplanationRequest>,
) -> Result<Json<CodeExplanation>, ApiError> {
    state
        .explanation_service
        .explain(request.into_inner())
        .await
        .map(Json)
        .map_err(|e| error_response(e, state.expose_errors))
}

/// Map a service error onto a status and body
pub fn error_response(err: Error, expose_errors: bool) -> ApiError {
    if !err.is_validation() {
        error!(error = %err, "Explanation failed");
        let detail = expose_errors.then(|| err.to_string());
        return Custom(
            Status::InternalServerError,
            Json(ErrorResponse::internal(MESSAGE_EXPLANATION_FAILED, detail)),
        );
    }
    let body = match err {
        Error::UnsupportedLanguage { message, supported } => {
            ErrorResponse::unsupported_language(message, supported)
        }
        other => ErrorResponse::message(other.user_message()),
    };
    Custom(Status::BadRequest, Json(body))
}
