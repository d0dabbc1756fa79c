//! Composition root
//!
//! Wires configuration into the explanation service:
//!
//! ```text
//! AppConfig → resolve_remote_provider → ExplanationServiceImpl
//!                                          ↑
//!                               PatternAnalyzer (always)
//! ```

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{AppContext, init_app, init_test_app};
pub use resolver::resolve_remote_provider;
