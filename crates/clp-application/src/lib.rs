//! Application Layer - Code Learning Platform
//!
//! Use cases and service contracts for the code-explanation engine,
//! following Clean Architecture principles.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines the `CodeAnalyzer` domain-service contract (local pattern analysis)
//! - Defines the `ExplanationServiceInterface` port used by the transport layer
//! - Implements the explanation use case: validate, try the remote model
//!   within a timeout, fall back to local analysis
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `clp-domain`: For domain entities, value objects, and core business rules
//! - Pure Rust libraries for async, serialization, etc.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
