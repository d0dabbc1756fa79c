//! Use Case Implementations
//!
//! | Use Case | Description |
//! |----------|-------------|
//! | [`ExplanationServiceImpl`] | Validate, try remote model, fall back to local analysis |

/// Explanation service use case
pub mod explanation_service;

pub use explanation_service::ExplanationServiceImpl;
