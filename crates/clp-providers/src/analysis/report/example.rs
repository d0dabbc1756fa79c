//! Example-usage section
//!
//! Finds the snippet's main function and synthesizes a plausible call with a
//! guessed output. Snippets without a callable function are shown as-is.

use std::collections::HashMap;
use std::sync::LazyLock;

use clp_domain::value_objects::SupportedLanguage;
use regex::Regex;

use crate::analysis::lines::value::param_names;
use crate::analysis::patterns::compile;
use crate::constants::{EXAMPLE_NAME_ARG, EXAMPLE_NUMERIC_ARGS};

/// Name and parameter names of a function found in a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<String>,
}

const NOT_FUNCTIONS: &[&str] = &[
    "main", "if", "for", "while", "switch", "catch", "return", "else", "sizeof", "new",
];

static SIGNATURES: LazyLock<HashMap<SupportedLanguage, Vec<Regex>>> = LazyLock::new(|| {
    let python = [r"(?m)^\s*(?:async\s+)?def\s+(\w+)\s*\(([^)]*)\)"];
    let script = [
        r"\bfunction\s+(\w+)\s*\(([^)]*)\)",
        r"\b(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s+)?\(?([^()=]*?)\)?\s*=>",
    ];
    let c_family = [
        r"(?m)^\s*(?:(?:public|private|protected|static|final|inline|virtual|const|unsigned)\s+)*[\w:<>\[\]]+[\s*&]+(\w+)\s*\(([^)]*)\)\s*(?:const\s*)?(?:throws\s+[\w, ]+)?\s*\{",
    ];

    let build = |patterns: &[&str]| -> Vec<Regex> {
        patterns
            .iter()
            .filter_map(|p| compile("function-signature", p))
            .collect()
    };

    HashMap::from([
        (SupportedLanguage::Python, build(&python)),
        (SupportedLanguage::JavaScript, build(&script)),
        (SupportedLanguage::React, build(&script)),
        (SupportedLanguage::C, build(&c_family)),
        (SupportedLanguage::Cpp, build(&c_family)),
        (SupportedLanguage::Java, build(&c_family)),
    ])
});

/// First callable function defined in `code`, ignoring `main`
pub fn find_function(code: &str, language: SupportedLanguage) -> Option<FunctionSignature> {
    let patterns = SIGNATURES.get(&language)?;
    patterns
        .iter()
        .flat_map(|re| re.captures_iter(code))
        .map(|caps| {
            (
                caps.get(0).map_or(0, |m| m.start()),
                caps.get(1).map_or("", |m| m.as_str()).to_string(),
                caps.get(2).map_or("", |m| m.as_str()).to_string(),
            )
        })
        .filter(|(_, name, _)| !name.is_empty() && !NOT_FUNCTIONS.contains(&name.as_str()))
        .min_by_key(|(start, _, _)| *start)
        .map(|(_, name, params)| FunctionSignature {
            name,
            params: param_names(&params),
        })
}

enum Call {
    Greeting,
    Numeric { mean: bool },
    Placeholder,
}

impl Call {
    fn for_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        let has = |keys: &[&str]| keys.iter().any(|k| lower.contains(k));
        if has(&["greet", "hello", "welcome"]) {
            Self::Greeting
        } else if has(&["average", "avg", "mean"]) {
            Self::Numeric { mean: true }
        } else if has(&["sum", "add", "total", "calc", "compute"]) {
            Self::Numeric { mean: false }
        } else {
            Self::Placeholder
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[i64]) -> String {
    let value = values.iter().sum::<i64>() as f64 / values.len().max(1) as f64;
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn list_literal(language: SupportedLanguage, values: &[i64]) -> String {
    let items = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    match language {
        SupportedLanguage::Java | SupportedLanguage::C | SupportedLanguage::Cpp => {
            format!("{{{items}}}")
        }
        _ => format!("[{items}]"),
    }
}

/// Statement that calls `call` and shows its result
fn print_statement(language: SupportedLanguage, call: &str) -> String {
    match language {
        SupportedLanguage::Python => format!("print({call})"),
        SupportedLanguage::JavaScript | SupportedLanguage::React => format!("console.log({call});"),
        SupportedLanguage::Java => format!("System.out.println({call});"),
        SupportedLanguage::Cpp => format!("std::cout << {call} << std::endl;"),
        _ => format!("{call};"),
    }
}

fn fenced(language: SupportedLanguage, body: &str) -> String {
    format!("```{}\n{}\n```", language.fence_tag(), body.trim_end())
}

fn run_directly(code: &str, language: SupportedLanguage) -> String {
    format!("Run this code directly:\n\n{}", fenced(language, code))
}

/// Example-usage section for `code`
pub fn example_section(
    code: &str,
    language: SupportedLanguage,
    function: Option<&FunctionSignature>,
) -> String {
    let Some(function) = function else {
        return run_directly(code, language);
    };
    let name = function.name.as_str();

    if language == SupportedLanguage::React && name.starts_with(|c: char| c.is_ascii_uppercase()) {
        return format!(
            "Render the component inside another component's JSX:\n\n{}",
            fenced(language, &format!("<{name} />"))
        );
    }

    let arity = function.params.len();
    let (call, output) = match Call::for_name(name) {
        Call::Greeting => (
            format!("{name}(\"{EXAMPLE_NAME_ARG}\")"),
            Some(format!("Hello, {EXAMPLE_NAME_ARG}!")),
        ),
        Call::Numeric { mean } if arity > 0 => {
            let (args, values): (String, Vec<i64>) = if arity == 1 {
                (
                    list_literal(language, &EXAMPLE_NUMERIC_ARGS),
                    EXAMPLE_NUMERIC_ARGS.to_vec(),
                )
            } else {
                let values: Vec<i64> = EXAMPLE_NUMERIC_ARGS
                    .iter()
                    .copied()
                    .cycle()
                    .take(arity)
                    .collect();
                let args = values
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                (args, values)
            };
            let result = if mean {
                self::mean(&values)
            } else {
                values.iter().sum::<i64>().to_string()
            };
            (format!("{name}({args})"), Some(result))
        }
        _ if arity > 0 => (format!("{name}(...)"), None),
        _ => (format!("{name}()"), None),
    };

    match output {
        Some(output) => format!(
            "Call the function like this:\n\n{}\n\nExpected output:\n\n```\n{output}\n```",
            fenced(language, &print_statement(language, &call))
        ),
        None => format!(
            "Call the function like this, replacing any `...` with the arguments it expects:\n\n{}",
            fenced(language, &print_statement(language, &call))
        ),
    }
}
