//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in clp-domain) and infrastructure constants.

// ============================================================================
// REMOTE MODEL CONSTANTS
// ============================================================================

/// Gemini API base URL
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini model used when none is configured
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// OpenAI model used when none is configured
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Upper bound on tokens generated by a chat completion
pub const OPENAI_MAX_TOKENS: u32 = 1000;

/// Sampling temperature for chat completions
pub const OPENAI_TEMPERATURE: f64 = 0.7;

/// Prefix shared by placeholder API keys shipped in sample configs
pub const PLACEHOLDER_KEY_PREFIX: &str = "your-";

/// Suffix shared by placeholder API keys shipped in sample configs
pub const PLACEHOLDER_KEY_SUFFIX: &str = "-here";

/// Number of key characters shown when logging a masked API key
pub const API_KEY_VISIBLE_PREFIX: usize = 4;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Content-Type header value for JSON
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// ANALYSIS CONSTANTS
// ============================================================================

/// Sample arguments used when synthesizing numeric example calls
pub const EXAMPLE_NUMERIC_ARGS: [i64; 4] = [5, 3, 2, 4];

/// Sample name used when synthesizing greeting example calls
pub const EXAMPLE_NAME_ARG: &str = "Alice";
