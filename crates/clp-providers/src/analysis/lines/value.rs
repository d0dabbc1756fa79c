//! Right-hand-side descriptions
//!
//! Assignment and return rules describe the value involved by its shape. The
//! cascade below is first-match-wins: interpolation, string, boolean, empty
//! value, collection, arithmetic, comparison, call, number, variable, and
//! finally a generic description.

use std::sync::LazyLock;

use clp_domain::value_objects::SupportedLanguage;
use regex::Regex;

use crate::analysis::patterns::compile;

type ValueTemplate = fn(&str, SupportedLanguage) -> String;

struct ValueRule {
    pattern: Regex,
    describe: ValueTemplate,
}

static VALUE_RULES: LazyLock<Vec<ValueRule>> = LazyLock::new(|| {
    let rules: [(&str, &str, ValueTemplate); 12] = [
        (
            "interpolation",
            r#"^[fF]["']|^`.*\$\{|\.format\(|^["'][^"']*%[sdif][^"']*["']\s*%"#,
            |_, _| "a formatted string that fills in other values".to_string(),
        ),
        (
            "string",
            r#"^(?:"[^"]*"|'[^']*'|`[^`]*`)$"#,
            |v, _| format!("the text {v}"),
        ),
        (
            "boolean",
            r"^(?:true|false|True|False)$",
            |v, _| format!("the boolean value `{v}`"),
        ),
        (
            "empty",
            r"^(?:None|null|undefined|nullptr|NULL)$",
            |v, _| format!("an empty value (`{v}`)"),
        ),
        (
            "sequence",
            r"^\[.*\]$",
            |_, lang| match lang {
                SupportedLanguage::Python => "a list of values".to_string(),
                _ => "an array of values".to_string(),
            },
        ),
        (
            "mapping",
            r"^\{.*\}$",
            |v, lang| match lang {
                SupportedLanguage::Python if v.contains(':') || v == "{}" => {
                    "a dictionary of key-value pairs".to_string()
                }
                SupportedLanguage::Python => "a set of unique values".to_string(),
                SupportedLanguage::C | SupportedLanguage::Cpp | SupportedLanguage::Java => {
                    "an initializer list of values".to_string()
                }
                _ => "an object with named properties".to_string(),
            },
        ),
        (
            "tuple",
            r"^\(.*,.*\)$",
            |_, _| "a tuple grouping several values".to_string(),
        ),
        (
            "arithmetic",
            r"^[\w.()\[\]]+(?:\s*[-+*/%]\s*[\w.()\[\]]+)+$",
            |v, _| format!("the result of the calculation `{v}`"),
        ),
        (
            "comparison",
            r"==|!=|<=|>=|<|>|&&|\|\||\band\b|\bor\b|\bnot\b",
            |v, _| format!("the true/false result of `{v}`"),
        ),
        (
            "call",
            r"^(?:new\s+)?[A-Za-z_][\w.:]*\s*\(.*\)$",
            describe_call,
        ),
        (
            "number",
            r"^-?\d+(?:\.\d+)?[fFlLuU]?$",
            |v, _| format!("the number {v}"),
        ),
        (
            "variable",
            r"^[A-Za-z_][\w.]*$",
            |v, _| format!("the current value of `{v}`"),
        ),
    ];

    rules
        .into_iter()
        .filter_map(|(name, pattern, describe)| {
            compile(name, pattern).map(|pattern| ValueRule { pattern, describe })
        })
        .collect()
});

fn describe_call(value: &str, _: SupportedLanguage) -> String {
    let head = value.split('(').next().unwrap_or(value).trim();
    match head.strip_prefix("new ") {
        Some(class) => format!("a new `{}` object", class.trim()),
        None if matches!(head, "input" | "prompt") => "text typed in by the user".to_string(),
        None => format!("the value returned by calling `{head}()`"),
    }
}

/// Describe the value expression `raw` in a short noun phrase
pub fn describe_value(raw: &str, language: SupportedLanguage) -> String {
    let value = raw.trim().trim_end_matches(';').trim();
    if value.is_empty() {
        return "no value".to_string();
    }
    if let Some(target) = value.strip_prefix('&').filter(|t| is_identifier(t)) {
        return format!("the memory address of `{target}`");
    }

    VALUE_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(value))
        .map_or_else(
            || format!("the value `{value}`"),
            |rule| (rule.describe)(value, language),
        )
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Human list of parameter names from a raw parameter list
///
/// Types, defaults and destructuring braces are stripped: `int a, int b = 2`
/// becomes "the parameters `a` and `b`".
pub fn describe_params(raw: &str) -> String {
    let names = param_names(raw);
    match names.as_slice() {
        [] => "no parameters".to_string(),
        [one] => format!("one parameter, `{one}`"),
        [init @ .., last] => {
            let init = init
                .iter()
                .map(|n| format!("`{n}`"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("the parameters {init} and `{last}`")
        }
    }
}

/// Parameter names from a raw parameter list
pub fn param_names(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .split(',')
        .filter_map(|param| {
            let param = param.split(['=', ':']).next().unwrap_or(param).trim();
            let name = param
                .rsplit(|c: char| c.is_whitespace() || c == '*' || c == '&')
                .next()
                .unwrap_or(param)
                .trim_start_matches("...")
                .trim_end_matches("[]");
            (!name.is_empty() && name != "void" && name != "self").then(|| name.to_string())
        })
        .collect()
}

/// Sentence for a compound assignment such as `total += x`
pub fn describe_update(target: &str, operator: &str, raw: &str, language: SupportedLanguage) -> String {
    let value = describe_value(raw, language);
    match operator {
        "+" => format!("Adds {value} to `{target}` and stores the result back in `{target}`."),
        "-" => format!("Subtracts {value} from `{target}` and stores the result back in `{target}`."),
        "*" => format!("Multiplies `{target}` by {value} and keeps the result in `{target}`."),
        "/" | "//" => format!("Divides `{target}` by {value} and keeps the result in `{target}`."),
        "%" => format!("Replaces `{target}` with the remainder of dividing it by {value}."),
        "**" => format!("Raises `{target}` to the power of {value}."),
        other => format!("Updates `{target}` with the `{other}=` operator using {value}."),
    }
}

/// Sentence for a bare call statement such as `items.append(x)`
pub fn describe_call_statement(callee: &str, args: &str) -> String {
    let args = args.trim();
    let with = if args.is_empty() {
        String::new()
    } else {
        format!(" with `{args}`")
    };
    match callee.rsplit_once('.') {
        Some((owner, method)) if !owner.is_empty() => {
            format!("Calls the `{method}` method of `{owner}`{with}.")
        }
        _ => format!("Calls the `{callee}` function{with}."),
    }
}
