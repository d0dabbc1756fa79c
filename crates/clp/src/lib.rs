//! # Code Learning Platform
//!
//! Explains short code snippets to beginners. A hosted language model is
//! asked first; when it is unavailable, slow or misconfigured, a local
//! pattern-analysis engine produces a structured Markdown report instead.
//!
//! Supported languages: C, Python, JavaScript, React, HTML, CSS, Java, C++.
//!
//! ## Example
//!
//! ```rust
//! use clp::domain::SupportedLanguage;
//! use clp::providers::analysis::PatternAnalyzer;
//! use clp::application::CodeAnalyzer;
//!
//! let report = PatternAnalyzer::new()
//!     .analyze("x = 5\nprint(x)", SupportedLanguage::Python)
//!     .unwrap();
//! assert_eq!(report.step_count(), 2);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, ports and the error taxonomy
//! - `application` - The explanation use case and the analyzer contract
//! - `providers` - Pattern analyzer and remote model adapters
//! - `infrastructure` - Configuration, logging and bootstrap
//! - `server` - Rocket HTTP API
//! - [`cli`] - Terminal commands

pub mod cli;

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use clp_domain::*;
}

/// Application layer - use cases
pub mod application {
    pub use clp_application::*;
}

/// Provider implementations
pub mod providers {
    pub use clp_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use clp_infrastructure::*;
}

/// Server layer - HTTP API
pub mod server {
    pub use clp_server::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use server::run_server;
