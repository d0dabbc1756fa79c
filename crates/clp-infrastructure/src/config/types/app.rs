//! Main application configuration

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::remote::RemoteConfig;
use super::server::ServerConfig;

/// Root configuration
///
/// ```toml
/// [server]
/// port = 5000
///
/// [remote]
/// provider = "gemini"
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Remote explanation model settings
    pub remote: RemoteConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}
