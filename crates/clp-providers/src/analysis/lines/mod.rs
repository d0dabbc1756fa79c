//! Line Annotator
//!
//! Every line is explained by the first matching rule of its language's
//! table, then the shared keyword rules, then a shape-based fallback that
//! always produces a sentence.
//!
//! | Language | Table |
//! |----------|-------|
//! | Python | `python` |
//! | C | C heads, brace rules, C-family declarations |
//! | C++ | C++ heads, exception rules, C heads, brace rules, declarations |
//! | Java | Java heads, exception rules, brace rules, declarations |
//! | JavaScript | JavaScript rules, exception rules, brace rules, methods |
//! | React | JSX and hook rules ahead of the JavaScript table |
//! | HTML / CSS | markup tables |

mod braces;
mod c_family;
mod fallback;
mod generic;
mod javascript;
mod markup;
mod python;
pub mod value;

use std::collections::HashMap;
use std::sync::LazyLock;

use clp_domain::value_objects::SupportedLanguage;
use tracing::trace;

use crate::analysis::patterns::RuleSet;

pub use fallback::describe_shape;

/// Rule tables keyed by language
pub static RULE_SETS: LazyLock<HashMap<SupportedLanguage, RuleSet>> = LazyLock::new(|| {
    SupportedLanguage::ALL
        .iter()
        .map(|&language| (language, rules_for(language)))
        .collect()
});

static GENERIC_RULES: LazyLock<RuleSet> = LazyLock::new(generic::rules);

fn rules_for(language: SupportedLanguage) -> RuleSet {
    match language {
        SupportedLanguage::Python => python::rules(),
        SupportedLanguage::C => c_family::c_heads()
            .extend(braces::rules())
            .extend(c_family::declarations()),
        SupportedLanguage::Cpp => c_family::cpp_heads()
            .extend(braces::exceptions())
            .extend(c_family::c_heads())
            .extend(braces::rules())
            .extend(c_family::declarations()),
        SupportedLanguage::Java => c_family::java_heads()
            .extend(braces::exceptions())
            .extend(braces::rules())
            .extend(c_family::declarations()),
        SupportedLanguage::JavaScript => javascript::js_rules()
            .extend(braces::exceptions())
            .extend(braces::rules())
            .extend(javascript::js_tail()),
        SupportedLanguage::React => javascript::react_rules()
            .extend(javascript::js_rules())
            .extend(braces::exceptions())
            .extend(braces::rules())
            .extend(javascript::js_tail()),
        SupportedLanguage::Html => markup::html_rules(),
        SupportedLanguage::Css => markup::css_rules(),
    }
}

/// Language table for `language`
pub fn rule_set(language: SupportedLanguage) -> Option<&'static RuleSet> {
    RULE_SETS.get(&language)
}

/// Shared keyword rules tried after the language table
pub fn generic_rules() -> &'static RuleSet {
    &GENERIC_RULES
}

/// Explain one source line; never fails and never returns an empty string
pub fn explain_line(line: &str, language: SupportedLanguage) -> String {
    let line = line.trim();
    if line.is_empty() {
        return describe_shape(line);
    }

    let hit = rule_set(language)
        .and_then(|rules| rules.explain(line, language))
        .or_else(|| GENERIC_RULES.explain(line, language));

    match hit {
        Some((rule, text)) if !text.trim().is_empty() => {
            trace!(rule, language = %language, "Line rule matched");
            text
        }
        _ => describe_shape(line),
    }
}
