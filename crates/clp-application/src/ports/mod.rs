//! Application Ports
//!
//! Contracts the outer layers (transport, CLI) use to reach the application
//! services.

/// Application service port interfaces
pub mod services;

pub use services::{ExplanationRequest, ExplanationServiceInterface};
