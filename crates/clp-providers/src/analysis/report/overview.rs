//! Overview paragraph: apparent purpose plus a structure summary

use std::sync::LazyLock;

use clp_domain::entities::LineRecord;
use clp_domain::value_objects::{RoleTag, SupportedLanguage};
use regex::Regex;

use crate::analysis::patterns::compile;

/// Apparent main purpose of a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Greeting,
    Calculation,
    Sorting,
    Searching,
    Validation,
    DataLoading,
    UiRendering,
    General,
}

/// Keyword table, checked in order
const PURPOSE_KEYWORDS: &[(Purpose, &[&str])] = &[
    (Purpose::Greeting, &["greet", "hello", "welcome"]),
    (
        Purpose::Calculation,
        &["calc", "compute", "area", "sum", "add", "total", "average", "avg", "mean"],
    ),
    (Purpose::Sorting, &["sort", "order"]),
    (Purpose::Searching, &["search", "find", "lookup"]),
    (Purpose::Validation, &["validate", "check", "verify", "is_"]),
    (Purpose::DataLoading, &["fetch", "load", "request", "api"]),
    (Purpose::UiRendering, &["render", "component", "jsx"]),
];

static IDENTIFIER: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile("identifier", r"[A-Za-z_][A-Za-z0-9_]*"));

impl Purpose {
    fn from_word(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        PURPOSE_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|k| word.starts_with(k) || word.contains(&format!("_{k}")))
            })
            .map(|(purpose, _)| *purpose)
    }

    /// Purpose from the main function's name, else from the snippet's identifiers
    pub fn detect(function_name: Option<&str>, code: &str) -> Self {
        if let Some(purpose) = function_name.and_then(Self::from_name) {
            return purpose;
        }
        IDENTIFIER
            .as_ref()
            .and_then(|re| re.find_iter(code).find_map(|m| Self::from_word(m.as_str())))
            .unwrap_or(Self::General)
    }

    fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        PURPOSE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(purpose, _)| *purpose)
    }

    /// Verb phrase describing the purpose
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Greeting => "creates a personalized greeting message for the name it is given",
            Self::Calculation => "performs a calculation and produces a numeric result",
            Self::Sorting => "puts a collection of values in order",
            Self::Searching => "searches through data for a matching value",
            Self::Validation => "checks whether a value meets certain rules",
            Self::DataLoading => "loads or fetches data from another source",
            Self::UiRendering => "renders part of a user interface",
            Self::General => "performs a specific operation",
        }
    }
}

fn counted(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Overview paragraph for a snippet
pub fn overview(
    language: SupportedLanguage,
    function_name: Option<&str>,
    purpose: Purpose,
    lines: &[LineRecord],
) -> String {
    let label = language.display_name();
    let intro = match function_name {
        Some(name) => format!("This {label} code defines `{name}`, which {}.", purpose.phrase()),
        None => format!("This {label} code {}.", purpose.phrase()),
    };

    let tally = |tag: RoleTag| lines.iter().filter(|line| line.has_role(tag)).count();
    format!(
        "{intro} It has {}: {}, {}, {} and {}.",
        counted(lines.len(), "line of code", "lines of code"),
        counted(tally(RoleTag::Import), "import", "imports"),
        counted(
            tally(RoleTag::FunctionDef),
            "function definition",
            "function definitions"
        ),
        counted(
            tally(RoleTag::VariableDecl),
            "variable declaration",
            "variable declarations"
        ),
        counted(
            tally(RoleTag::ControlFlow),
            "control-flow statement",
            "control-flow statements"
        ),
    )
}
