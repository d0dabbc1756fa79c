//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers of the Code Learning Platform.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `CLP__` environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`di`] | Composition root: remote provider selection and service wiring |
//! | [`error_ext`] | Context helpers that map foreign errors into domain errors |
//! | [`constants`] | Infrastructure constants |
//! | [`utils`] | Timing helper |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use utils::TimedOperation;
