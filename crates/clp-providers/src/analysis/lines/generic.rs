//! Keyword rules shared by every language

use crate::analysis::lines::value::describe_call_statement;
use crate::analysis::patterns::{LineRule, RuleSet, cap};

pub(super) fn rules() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new(
            "call-statement",
            r"^(?:await\s+)?([A-Za-z_][\w.:]*)\s*\((.*)\)\s*;?$",
            |c, _| describe_call_statement(cap(c, 1), cap(c, 2)),
        ),
        LineRule::new("keyword-if", r"\bif\b", |_, _| {
            "Conditional statement: checks a condition and runs the following code only if it is true."
                .to_string()
        }),
        LineRule::new("keyword-loop", r"\b(?:for|while)\b", |_, _| {
            "Loop statement: repeats a block of code multiple times.".to_string()
        }),
        LineRule::new("keyword-return", r"\breturn\b", |_, _| {
            "Returns a value from a function to the code that called it.".to_string()
        }),
        LineRule::new(
            "keyword-print",
            r"\b(?:print|printf|println|cout|puts|echo|log)\b",
            |_, _| "Outputs text or data to the console or screen.".to_string(),
        ),
        LineRule::new("keyword-assignment", r"[^=!<>]=[^=]", |_, _| {
            "Assignment: stores a value in a variable.".to_string()
        }),
        LineRule::new("keyword-function", r"\b(?:def|function)\s", |_, _| {
            "Function definition: creates a reusable block of code.".to_string()
        }),
        LineRule::new("keyword-class", r"\bclass\s", |_, _| {
            "Class definition: creates a blueprint for objects.".to_string()
        }),
    ])
}
