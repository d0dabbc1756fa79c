//! # Code Learning Platform - Provider Implementations
//!
//! This crate contains the concrete implementations behind the ports defined
//! in `clp-domain` and `clp-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Local analysis | `CodeAnalyzer` | `PatternAnalyzer` |
//! | Remote model | `RemoteExplanationProvider` | Gemini, OpenAI, Null |
//!
//! ## Feature Flags
//!
//! Remote adapters can be disabled for minimal builds:
//!
//! ```toml
//! [dependencies]
//! clp-providers = { version = "0.1", default-features = false, features = ["remote-gemini"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use clp_providers::analysis::PatternAnalyzer;
//! use clp_providers::remote::GeminiExplanationProvider;
//! ```

// Re-export clp-domain types commonly used with providers
pub use clp_domain::error::{Error, Result};
pub use clp_domain::ports::providers::RemoteExplanationProvider;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration for API-based providers
pub mod http;

/// Local pattern-analysis engine
///
/// Implements `CodeAnalyzer`: construct recognition, line annotation and
/// report synthesis.
pub mod analysis;

/// Remote explanation model adapters
///
/// Implements `RemoteExplanationProvider` for hosted language models.
pub mod remote;
