//! Server-specific constants
//!
//! Fixed response messages of the HTTP API.

/// Mount point of the API routes
pub const API_BASE: &str = "/api";

/// Health endpoint greeting
pub const MESSAGE_HEALTH: &str = "Code Learning Platform API is running!";

/// Internal failure while producing an explanation
pub const MESSAGE_EXPLANATION_FAILED: &str = "Failed to generate explanation";

/// No route matched
pub const MESSAGE_ROUTE_NOT_FOUND: &str = "Route not found";

/// Body was not valid JSON or had the wrong shape
pub const MESSAGE_INVALID_BODY: &str = "Invalid request body";

/// Unhandled server failure
pub const MESSAGE_INTERNAL_ERROR: &str = "Internal server error";

/// `remoteModel` value when no remote provider is configured
pub const REMOTE_MODEL_DISABLED: &str = "disabled";
