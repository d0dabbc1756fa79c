//! Supported Language Value Object
//!
//! The closed allow-list of languages the explanation engine accepts, and the
//! validation rules that turn a caller-supplied language string into one of
//! them.

use serde::{Deserialize, Serialize};

use crate::constants::{MESSAGE_LANGUAGE_REQUIRED, MESSAGE_UNSUPPORTED_LANGUAGE};
use crate::value_objects::construct::ConstructCategory;

/// A language on the allow-list
///
/// ## Business Rules
///
/// - The set is closed: there is no "other" variant
/// - Validation is case-insensitive and ignores surrounding whitespace
/// - A token followed by a space and any suffix is accepted (`"python 3"`,
///   `"javascript es6"`), and a token immediately followed by a version
///   number is normalized to that form first (`"python3"`)
///
/// ## Example
///
/// ```
/// use clp_domain::SupportedLanguage;
///
/// assert_eq!(SupportedLanguage::validate(Some(" Python ")), Ok(SupportedLanguage::Python));
/// assert_eq!(SupportedLanguage::validate(Some("python3")), Ok(SupportedLanguage::Python));
/// assert!(SupportedLanguage::validate(Some("ruby")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    /// C
    C,
    /// Python
    Python,
    /// JavaScript
    JavaScript,
    /// React (JavaScript with JSX and hooks)
    React,
    /// HTML markup
    Html,
    /// CSS stylesheets
    Css,
    /// Java
    Java,
    /// C++
    Cpp,
}

impl SupportedLanguage {
    /// Every supported language, in display order
    pub const ALL: [Self; 8] = [
        Self::C,
        Self::Python,
        Self::JavaScript,
        Self::React,
        Self::Html,
        Self::Css,
        Self::Java,
        Self::Cpp,
    ];

    /// Lower-case tokens accepted for this language
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::C => &["c"],
            Self::Python => &["python"],
            Self::JavaScript => &["javascript"],
            Self::React => &["react"],
            Self::Html => &["html"],
            Self::Css => &["css"],
            Self::Java => &["java"],
            Self::Cpp => &["cpp", "c++"],
        }
    }

    /// Stable identifier used in configuration and serialized payloads
    pub fn id(self) -> &'static str {
        self.tokens()[0]
    }

    /// Canonical display name ("Python", not "python")
    pub fn display_name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::React => "React",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Java => "Java",
            Self::Cpp => "C++",
        }
    }

    /// Display names of the whole allow-list, in display order
    pub fn supported_display_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|lang| lang.display_name()).collect()
    }

    /// Info string used for fenced code blocks
    pub fn fence_tag(self) -> &'static str {
        match self {
            Self::React => "jsx",
            other => other.id(),
        }
    }

    /// Construct categories a detector for this language may report
    pub fn construct_categories(self) -> &'static [ConstructCategory] {
        use ConstructCategory as Cat;
        match self {
            Self::Python => &[
                Cat::Function,
                Cat::Loop,
                Cat::Conditional,
                Cat::DataStructure,
                Cat::Import,
                Cat::StringFormat,
                Cat::ErrorHandling,
                Cat::Class,
                Cat::Output,
            ],
            Self::C => &[
                Cat::Function,
                Cat::Loop,
                Cat::Conditional,
                Cat::DataStructure,
                Cat::Import,
                Cat::Pointer,
                Cat::Memory,
                Cat::Output,
            ],
            Self::JavaScript => &[
                Cat::Function,
                Cat::Loop,
                Cat::Conditional,
                Cat::DataStructure,
                Cat::Import,
                Cat::AsyncPattern,
                Cat::StringFormat,
                Cat::Declaration,
                Cat::Output,
            ],
            Self::React => &[
                Cat::Function,
                Cat::Loop,
                Cat::Conditional,
                Cat::DataStructure,
                Cat::Import,
                Cat::Hook,
                Cat::Jsx,
                Cat::AsyncPattern,
                Cat::Declaration,
                Cat::Event,
            ],
            Self::Html => &[Cat::Markup, Cat::Event, Cat::Import, Cat::Styling],
            Self::Css => &[Cat::Styling, Cat::Conditional],
            Self::Java => &[
                Cat::Function,
                Cat::Loop,
                Cat::Conditional,
                Cat::DataStructure,
                Cat::Import,
                Cat::Class,
                Cat::ErrorHandling,
                Cat::Output,
            ],
            Self::Cpp => &[
                Cat::Function,
                Cat::Loop,
                Cat::Conditional,
                Cat::DataStructure,
                Cat::Import,
                Cat::Pointer,
                Cat::Memory,
                Cat::Class,
                Cat::Declaration,
                Cat::Output,
            ],
        }
    }

    /// Validate a caller-supplied language string against the allow-list
    pub fn validate(raw: Option<&str>) -> Result<Self, LanguageRejection> {
        let Some(trimmed) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Err(LanguageRejection::missing());
        };

        let normalized = normalize_version_suffix(&trimmed.to_lowercase());
        Self::ALL
            .into_iter()
            .find(|lang| {
                lang.tokens()
                    .iter()
                    .any(|token| matches_token(&normalized, token))
            })
            .ok_or_else(LanguageRejection::unsupported)
    }
}

impl std::fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// `"python3"` becomes `"python 3"` when the part before the first digit is
/// exactly a known token; anything else is returned unchanged.
fn normalize_version_suffix(value: &str) -> String {
    let Some(digit_at) = value.find(|c: char| c.is_ascii_digit()) else {
        return value.to_string();
    };
    let (head, tail) = value.split_at(digit_at);
    let head_is_token = SupportedLanguage::ALL
        .iter()
        .any(|lang| lang.tokens().contains(&head));
    if head_is_token {
        format!("{head} {tail}")
    } else {
        value.to_string()
    }
}

fn matches_token(value: &str, token: &str) -> bool {
    value == token
        || value
            .strip_prefix(token)
            .is_some_and(|rest| rest.starts_with(' '))
}

/// Why a declared language was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LanguageRejection {
    /// Message naming the problem
    pub message: String,
    /// Display names of the allow-list
    pub supported_languages: Vec<&'static str>,
}

impl LanguageRejection {
    /// No language was declared
    pub fn missing() -> Self {
        Self {
            message: MESSAGE_LANGUAGE_REQUIRED.to_string(),
            supported_languages: SupportedLanguage::supported_display_names(),
        }
    }

    /// The declared language is not on the allow-list
    pub fn unsupported() -> Self {
        Self {
            message: MESSAGE_UNSUPPORTED_LANGUAGE.to_string(),
            supported_languages: SupportedLanguage::supported_display_names(),
        }
    }
}
