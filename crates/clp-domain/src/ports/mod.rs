//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and external layers. High-level
//! modules (domain) define the interfaces; low-level modules (providers,
//! infrastructure) implement them.

/// External service provider ports
pub mod providers;

pub use providers::RemoteExplanationProvider;
