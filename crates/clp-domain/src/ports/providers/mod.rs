//! External Provider Ports
//!
//! Ports for external services the domain depends on.
//!
//! | Port | Description |
//! |------|-------------|
//! | RemoteExplanationProvider | Hosted language model that explains code |

/// Remote explanation provider port
pub mod remote_explanation;

pub use remote_explanation::RemoteExplanationProvider;
