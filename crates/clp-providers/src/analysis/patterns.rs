//! Rule primitives shared by the recognizer and the line annotator
//!
//! Patterns are compiled from literals once, when the owning table is first
//! used. A pattern that fails to compile is logged and its rule dropped, so a
//! bad table entry degrades coverage instead of aborting a request.

use clp_domain::value_objects::{ConstructCategory, ConstructMatch, SupportedLanguage};
use regex::{Captures, Regex};
use tracing::error;

/// Compile a table pattern, logging and discarding invalid ones
pub(crate) fn compile(name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            error!(rule = name, error = %e, "Dropping rule with invalid pattern");
            None
        }
    }
}

/// Text of capture group `index`, or `""` when it did not participate
pub(crate) fn cap<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str().trim())
}

// ============================================================================
// Construct detectors
// ============================================================================

/// A single independent construct test over a whole snippet
pub struct Detector {
    category: ConstructCategory,
    label: &'static str,
    explanation: &'static str,
    example: &'static str,
    pattern: Regex,
}

impl Detector {
    /// Build a detector; `None` when the pattern does not compile
    pub(crate) fn new(
        category: ConstructCategory,
        label: &'static str,
        pattern: &str,
        explanation: &'static str,
        example: &'static str,
    ) -> Option<Self> {
        compile(label, pattern).map(|pattern| Self {
            category,
            label,
            explanation,
            example,
            pattern,
        })
    }

    /// Category reported by this detector
    pub fn category(&self) -> ConstructCategory {
        self.category
    }

    /// Label reported by this detector
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether the construct appears anywhere in `code`
    pub fn fires(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }

    /// The match this detector reports
    pub fn to_match(&self) -> ConstructMatch {
        ConstructMatch::new(self.category, self.label, self.explanation, self.example)
    }
}

// ============================================================================
// Line rules
// ============================================================================

/// Builds an explanation sentence from a rule's captures
pub type Template = fn(&Captures<'_>, SupportedLanguage) -> String;

/// One entry of a first-match-wins line cascade
pub struct LineRule {
    name: &'static str,
    pattern: Regex,
    template: Template,
}

impl LineRule {
    /// Build a rule; `None` when the pattern does not compile
    pub(crate) fn new(name: &'static str, pattern: &str, template: Template) -> Option<Self> {
        compile(name, pattern).map(|pattern| Self {
            name,
            pattern,
            template,
        })
    }

    /// Rule identifier, used in debug logs and tests
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Explanation for `line` if this rule matches it
    pub fn apply(&self, line: &str, language: SupportedLanguage) -> Option<String> {
        self.pattern
            .captures(line)
            .map(|caps| (self.template)(&caps, language))
    }
}

/// Ordered list of line rules
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<LineRule>,
}

impl RuleSet {
    /// Collect the rules that compiled, keeping their order
    pub(crate) fn from_rules(rules: impl IntoIterator<Item = Option<LineRule>>) -> Self {
        Self {
            rules: rules.into_iter().flatten().collect(),
        }
    }

    /// Append another set's rules at lower priority
    pub(crate) fn extend(mut self, other: Self) -> Self {
        self.rules.extend(other.rules);
        self
    }

    /// First matching rule's name and explanation
    pub fn explain(&self, line: &str, language: SupportedLanguage) -> Option<(&'static str, String)> {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(line, language).map(|text| (rule.name, text)))
    }

    /// Rule names in priority order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(LineRule::name).collect()
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
