//! # Code Learning Platform - Domain Layer
//!
//! Core types of the code-explanation engine. This crate has no I/O: it
//! defines what a supported language is, what a recognized construct looks
//! like, how a finished explanation report is shaped, and the port through
//! which a remote language model may be asked for an explanation.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `SupportedLanguage`, `ConstructMatch`, `RoleTag`, `ExplanationSource`, `ExplanationPrompt` |
//! | [`entities`] | `LineRecord`, `ExplanationReport`, `CodeExplanation` |
//! | [`ports`] | Provider ports implemented by outer layers |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | User-facing messages and defaults |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{CodeExplanation, ExplanationReport, LineRecord};
pub use error::{Error, Result};
pub use value_objects::{
    ConstructCategory, ConstructMatch, ExplanationPrompt, ExplanationSource, LanguageRejection,
    RoleTag, SupportedLanguage,
};
