//! Construct Value Objects
//!
//! A construct is a recognizable syntactic idiom (a loop, a hook call, a
//! list comprehension). These types carry what the recognizer found and the
//! per-line role tags the structure classifier assigns.

use serde::{Deserialize, Serialize};

/// Semantic grouping of a construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstructCategory {
    /// Function, method, lambda or component definitions
    Function,
    /// Repetition (`for`, `while`, list rendering)
    Loop,
    /// Branching (`if`, ternaries, media queries)
    Conditional,
    /// Collections, structs, generics
    DataStructure,
    /// Imports, includes, embedded resources
    Import,
    /// Pointer use
    Pointer,
    /// Manual memory management
    Memory,
    /// React hooks
    Hook,
    /// JSX markup
    Jsx,
    /// `async`/`await` and promises
    AsyncPattern,
    /// Interpolated or formatted strings
    StringFormat,
    /// `try`/`except`/`catch`
    ErrorHandling,
    /// Class definitions
    Class,
    /// Variable declaration idioms
    Declaration,
    /// Console or standard output
    Output,
    /// Event handling and user input
    Event,
    /// Document structure
    Markup,
    /// Presentation rules
    Styling,
}

impl ConstructCategory {
    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Loop => "loop",
            Self::Conditional => "conditional",
            Self::DataStructure => "dataStructure",
            Self::Import => "import",
            Self::Pointer => "pointer",
            Self::Memory => "memory",
            Self::Hook => "hook",
            Self::Jsx => "jsx",
            Self::AsyncPattern => "asyncPattern",
            Self::StringFormat => "stringFormat",
            Self::ErrorHandling => "errorHandling",
            Self::Class => "class",
            Self::Declaration => "declaration",
            Self::Output => "output",
            Self::Event => "event",
            Self::Markup => "markup",
            Self::Styling => "styling",
        }
    }
}

/// One recognized idiom in a snippet
///
/// `example` is an illustrative fragment that does not come from the
/// caller's code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructMatch {
    /// Semantic grouping
    pub category: ConstructCategory,
    /// Short human name, unique within one recognition result
    pub label: String,
    /// One or two sentences describing the idiom
    pub explanation: String,
    /// Illustrative code fragment
    pub example: String,
}

impl ConstructMatch {
    /// Create a new construct match
    pub fn new(
        category: ConstructCategory,
        label: impl Into<String>,
        explanation: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            category,
            label: label.into(),
            explanation: explanation.into(),
            example: example.into(),
        }
    }
}

/// Structural role of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoleTag {
    /// Brings in external code
    Import,
    /// Defines a function, class or component
    FunctionDef,
    /// Declares or binds a variable
    VariableDecl,
    /// Changes the flow of execution
    ControlFlow,
}
