//! HTTP Client Abstractions
//!
//! Configuration and construction of the shared HTTP client used by
//! API-based providers. The infrastructure layer builds one client at
//! bootstrap and injects it into each remote adapter.
//!
//! ## Contents
//!
//! - `HttpClientConfig` - Configuration for HTTP client settings
//! - `create_http_client` - Build a `reqwest::Client` from the configuration
//! - `HttpResponseUtils` - Utilities for handling HTTP responses (re-exported from utils)

pub mod provider;

pub use provider::{HttpClientConfig, create_http_client};
pub use crate::utils::HttpResponseUtils;
