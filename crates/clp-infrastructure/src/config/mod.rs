//! Configuration
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from built-in defaults, an
//! optional TOML file and `CLP__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, RemoteConfig, RemoteProviderKind, ServerConfig};
