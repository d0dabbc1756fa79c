//! Domain Services
//!
//! Interfaces for domain services that encapsulate the engine's business
//! logic.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`CodeAnalyzer`] | Local pattern analysis producing an explanation report |

/// Local code analysis domain service interface
pub mod analysis;

pub use analysis::CodeAnalyzer;
