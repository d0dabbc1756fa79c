//! Domain layer constants
//!
//! User-facing messages and defaults that belong to the explanation domain.
//! Infrastructure-specific constants live in `clp_infrastructure::constants`.

// ============================================================================
// VALIDATION MESSAGES
// ============================================================================

/// Message returned when the submitted code is missing or whitespace-only
pub const MESSAGE_CODE_REQUIRED: &str = "Code is required";

/// Message returned when the declared language is not on the allow-list
pub const MESSAGE_UNSUPPORTED_LANGUAGE: &str =
    "Only C, Python, JavaScript, React, HTML, CSS, Java, and C++ languages are supported.";

/// Message returned when no language was declared
pub const MESSAGE_LANGUAGE_REQUIRED: &str = "Language is required. Only C, Python, JavaScript, React, HTML, CSS, Java, and C++ languages are supported.";

// ============================================================================
// REMOTE MODEL DEFAULTS
// ============================================================================

/// Default upper bound for a remote explanation call, in seconds
pub const REMOTE_TIMEOUT_SECS_DEFAULT: u64 = 30;

/// System instruction sent to chat-style models alongside the prompt
pub const TUTOR_SYSTEM_INSTRUCTION: &str = "You are a helpful programming tutor who explains code in simple, beginner-friendly language. Focus on making complex concepts accessible to new programmers.";

// ============================================================================
// REPORT HEADINGS
// ============================================================================

/// Heading of the overview section
pub const HEADING_OVERVIEW: &str = "What This Code Does";

/// Heading of the detected-constructs section
pub const HEADING_CONSTRUCTS: &str = "Detected Constructs";

/// Heading of the per-line section
pub const HEADING_STEP_BY_STEP: &str = "Step-by-Step Explanation";

/// Heading of the language concepts section
pub const HEADING_CONCEPTS: &str = "Key Concepts";

/// Heading of the example usage section
pub const HEADING_EXAMPLE: &str = "Example Usage";
