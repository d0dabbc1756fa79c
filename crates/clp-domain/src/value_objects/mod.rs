//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SupportedLanguage`] | Language on the closed allow-list |
//! | [`LanguageRejection`] | Why a declared language was refused |
//! | [`ConstructMatch`] | One recognized idiom in a snippet |
//! | [`ConstructCategory`] | Semantic grouping of a construct |
//! | [`RoleTag`] | Structural role of a source line |
//! | [`ExplanationSource`] | Provenance of an explanation |
//! | [`ExplanationPrompt`] | Prompt sent to a remote model |

/// Construct and role-tag value objects
pub mod construct;
/// Language allow-list and validation
pub mod language;
/// Remote model prompt
pub mod prompt;
/// Provenance tag
pub mod source;

// Re-export commonly used value objects
pub use construct::{ConstructCategory, ConstructMatch, RoleTag};
pub use language::{LanguageRejection, SupportedLanguage};
pub use prompt::ExplanationPrompt;
pub use source::ExplanationSource;
