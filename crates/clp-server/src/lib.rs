//! # Code Learning Platform Server
//!
//! HTTP API for the code-explanation engine, built on Rocket.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/explain-code` | Explain a snippet |
//! | GET | `/api/health` | Liveness and active remote model |
//!
//! Unmatched routes and malformed bodies are answered by JSON catchers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clp_server::run_server;
//!
//! #[rocket::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     run_server(None).await
//! }
//! ```

pub mod builder;
pub mod catchers;
pub mod constants;
pub mod cors;
pub mod handlers;
pub mod init;
pub mod models;

pub use builder::{BuilderError, ServerBuilder};
pub use handlers::ApiState;
pub use init::{ServerResult, run_server, serve};
