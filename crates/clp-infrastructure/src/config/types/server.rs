//! HTTP server configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port; must not be 0
    pub port: u16,
    /// Attach CORS headers and answer preflight requests
    pub cors_enabled: bool,
    /// Include the error detail in 500 responses
    pub expose_errors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            cors_enabled: true,
            expose_errors: true,
        }
    }
}

impl ServerConfig {
    /// `host:port` for log lines
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
