//! Brace-language rules shared by C, C++, Java, JavaScript and React

use clp_domain::value_objects::SupportedLanguage;
use regex::Captures;

use crate::analysis::lines::value::{describe_update, describe_value};
use crate::analysis::patterns::{LineRule, RuleSet, cap};

/// Inline body of a header line, without its braces
fn inline_body<'a>(rest: &'a str) -> &'a str {
    rest.trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .trim()
}

fn classic_for(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let (init, condition, step) = (cap(c, 1), cap(c, 2), cap(c, 3));
    let mut sentence = if condition.is_empty() {
        "Starts a loop that repeats forever unless something inside breaks out of it".to_string()
    } else {
        format!("Starts a loop that repeats while `{condition}` is true")
    };
    if !init.is_empty() {
        sentence.push_str(&format!(", starting from `{init}`"));
    }
    if !step.is_empty() {
        sentence.push_str(&format!(" and applying `{step}` after each pass"));
    }
    sentence.push('.');
    match inline_body(cap(c, 4)) {
        "" => {}
        body => sentence.push_str(&format!(" Each repetition runs `{body}`.")),
    }
    sentence
}

fn if_header(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let condition = cap(c, 1);
    match inline_body(cap(c, 2)) {
        "" => format!(
            "Checks whether `{condition}` is true and runs the following block only if it is."
        ),
        body => format!("Checks whether `{condition}` is true and, if so, runs `{body}`."),
    }
}

fn while_header(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let condition = cap(c, 1);
    if cap(c, 2) == ";" {
        format!("Ends a do-while loop: the body repeats again while `{condition}` is true.")
    } else {
        format!("Starts a loop that keeps repeating as long as `{condition}` is true.")
    }
}

fn step_operator(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let (op, name) = match cap(c, 1) {
        "" => (cap(c, 4), cap(c, 3)),
        prefix => (prefix, cap(c, 2)),
    };
    if op == "++" {
        format!("Increases `{name}` by one.")
    } else {
        format!("Decreases `{name}` by one.")
    }
}

pub(super) fn rules() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new(
            "brace-for",
            r"^for\s*\(([^;]*);([^;]*);([^)]*)\)\s*(.*)$",
            classic_for,
        ),
        LineRule::new(
            "brace-else-if",
            r"^\}?\s*else\s+if\s*\((.+?)\)\s*(\{.*|[^{}]*)$",
            |c, _| {
                format!(
                    "Checks another condition, `{}`, when the earlier ones were false.",
                    cap(c, 1)
                )
            },
        ),
        LineRule::new("brace-if", r"^if\s*\((.+?)\)\s*(\{.*|[^{}]*)$", if_header),
        LineRule::new("brace-else", r"^\}?\s*else\s*\{?\s*$", |_, _| {
            "Runs the following block when the previous condition was false.".to_string()
        }),
        LineRule::new(
            "brace-while",
            r"^\}?\s*while\s*\((.+?)\)\s*(\{.*|[^{}]*)$",
            while_header,
        ),
        LineRule::new("brace-do", r"^do\s*\{?\s*$", |_, _| {
            "Starts a do-while loop whose body always runs at least once.".to_string()
        }),
        LineRule::new("brace-switch", r"^switch\s*\((.+)\)\s*\{?\s*$", |c, _| {
            format!(
                "Chooses which `case` to run based on the value of `{}`.",
                cap(c, 1)
            )
        }),
        LineRule::new("brace-case", r"^case\s+(.+?)\s*:", |c, _| {
            format!(
                "Handles the case where the value equals `{}`.",
                cap(c, 1)
            )
        }),
        LineRule::new("brace-default", r"^default\s*:", |_, _| {
            "Handles every value not matched by an earlier `case`.".to_string()
        }),
        LineRule::new("brace-break", r"^break\s*;?$", |_, _| {
            "Exits the nearest loop or `switch` immediately.".to_string()
        }),
        LineRule::new("brace-continue", r"^continue\s*;?$", |_, _| {
            "Skips to the next repetition of the loop.".to_string()
        }),
        LineRule::new("brace-return", r"^return\b\s*(.*?)\s*;?$", |c, lang| {
            match cap(c, 1) {
                "" => "Exits the function without returning a value.".to_string(),
                value => format!(
                    "Returns {} to the code that called the function.",
                    describe_value(value, lang)
                ),
            }
        }),
        LineRule::new(
            "brace-step",
            r"^(?:(\+\+|--)\s*([A-Za-z_][\w.\[\]]*)|([A-Za-z_][\w.\[\]]*)\s*(\+\+|--))\s*;?$",
            step_operator,
        ),
        LineRule::new(
            "brace-compound",
            r"^([A-Za-z_*][\w.\[\]>-]*)\s*([-+*/%])=\s*(.+?)\s*;?$",
            |c, lang| describe_update(cap(c, 1), cap(c, 2), cap(c, 3), lang),
        ),
        LineRule::new(
            "brace-assign",
            r"^([A-Za-z_*][\w.\[\]>*-]*)\s*=\s*([^=].*?)\s*;?$",
            |c, lang| {
                format!(
                    "Stores {} in `{}`.",
                    describe_value(cap(c, 2), lang),
                    cap(c, 1)
                )
            },
        ),
        LineRule::new("brace-close", r"^\}[\s)\];,]*$", |_, _| {
            "Closes the current block of code.".to_string()
        }),
        LineRule::new("brace-open", r"^\{$", |_, _| {
            "Opens a new block of code.".to_string()
        }),
    ])
}

/// `try`/`catch`/`finally`/`throw` for Java, C++ and JavaScript
pub(super) fn exceptions() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new("exc-try", r"^try\s*\{?\s*$", |_, _| {
            "Starts a block whose errors (exceptions) can be caught and handled below.".to_string()
        }),
        LineRule::new(
            "exc-catch",
            r"^\}?\s*catch\s*(?:\(\s*(?:const\s+)?([\w:.]*?)[\s&]*(\w*)\s*\))?\s*\{?\s*$",
            |c, _| {
                let bound = match cap(c, 2) {
                    "" => String::new(),
                    name => format!(" as `{name}`"),
                };
                match cap(c, 1) {
                    "" => format!(
                        "Catches any error thrown in the `try` block{bound} and handles it here."
                    ),
                    kind => format!(
                        "Catches a `{kind}` thrown in the `try` block{bound} and handles it here."
                    ),
                }
            },
        ),
        LineRule::new("exc-finally", r"^\}?\s*finally\s*\{?\s*$", |_, _| {
            "Runs cleanup code whether or not an exception was thrown.".to_string()
        }),
        LineRule::new("exc-throw", r"^throw\s+(.+?)\s*;?$", |c, lang| {
            format!(
                "Throws {} as an exception, stopping normal execution until a matching `catch` handles it.",
                describe_value(cap(c, 1), lang)
            )
        }),
    ])
}
