//! Remote explanation provider implementations
//!
//! | Provider | Endpoint |
//! |----------|----------|
//! | [`GeminiExplanationProvider`] | `{base}/v1beta/models/{model}:generateContent` |
//! | [`OpenAIExplanationProvider`] | `{base}/v1/chat/completions` |
//! | [`NullExplanationProvider`] | none, always fails |

pub mod helpers;
pub mod null;

#[cfg(feature = "remote-gemini")]
pub mod gemini;
#[cfg(feature = "remote-openai")]
pub mod openai;

pub use helpers::{is_placeholder_key, mask_api_key, usable_api_key};
pub use null::NullExplanationProvider;

#[cfg(feature = "remote-gemini")]
pub use gemini::GeminiExplanationProvider;
#[cfg(feature = "remote-openai")]
pub use openai::OpenAIExplanationProvider;
