//! Python line rules

use clp_domain::value_objects::SupportedLanguage;
use regex::Captures;

use crate::analysis::lines::value::{describe_params, describe_update, describe_value, param_names};
use crate::analysis::patterns::{LineRule, RuleSet, cap};

fn function_def(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let kind = if c.get(1).is_some() {
        "an asynchronous function"
    } else {
        "a function"
    };
    let head = format!(
        "Defines {kind} named `{}` that takes {}",
        cap(c, 2),
        describe_params(cap(c, 3))
    );
    let body = cap(c, 4);
    match body.strip_prefix("return") {
        Some(value) if value.is_empty() || value.starts_with(char::is_whitespace) => format!(
            "{head}, and immediately returns {}.",
            describe_value(value, language)
        ),
        _ if body.is_empty() => format!("{head}. The indented lines below form its body."),
        _ => format!("{head}, with the body `{body}` written on the same line."),
    }
}

fn range_loop(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let var = cap(c, 1);
    let args: Vec<&str> = cap(c, 2).split(',').map(str::trim).collect();
    let span = match args.as_slice() {
        [end] => format!("from 0 up to (but not including) `{end}`"),
        [start, end] => format!("from `{start}` up to (but not including) `{end}`"),
        [start, end, step] => format!("from `{start}` towards `{end}` in steps of `{step}`"),
        _ => "through a range of numbers".to_string(),
    };
    format!("Starts a loop that repeats with `{var}` counting {span}.")
}

fn for_each(c: &Captures<'_>, _: SupportedLanguage) -> String {
    format!(
        "Starts a loop that repeats once for each item in `{}`, storing the current item in `{}`.",
        cap(c, 2),
        cap(c, 1)
    )
}

fn print_call(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let args = cap(c, 1);
    if args.is_empty() {
        "Prints an empty line to the console.".to_string()
    } else {
        format!("Prints {} to the console.", describe_value(args, language))
    }
}

fn if_header(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let condition = cap(c, 1);
    match cap(c, 2) {
        "" => format!(
            "Checks whether `{condition}` is true. The indented block below runs only if it is."
        ),
        body => format!("Checks whether `{condition}` is true and, if so, runs `{body}`."),
    }
}

fn except_clause(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let bound = match cap(c, 2) {
        "" => String::new(),
        name => format!(", storing the error in `{name}`"),
    };
    match cap(c, 1) {
        "" => format!("Handles any error raised in the `try` block{bound}."),
        kind => format!("Handles a `{kind}` error raised in the `try` block{bound}."),
    }
}

fn comprehension(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let filter = match cap(c, 5) {
        "" => String::new(),
        condition => format!(", keeping only items where `{condition}`"),
    };
    format!(
        "Builds a new list `{}` by computing `{}` for each `{}` in `{}`{filter}.",
        cap(c, 1),
        cap(c, 2),
        cap(c, 3),
        cap(c, 4)
    )
}

fn assignment(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let target = cap(c, 1);
    let value = describe_value(cap(c, 2), language);
    let names = param_names(target);
    if names.len() > 1 {
        let list = names
            .iter()
            .map(|n| format!("`{n}`"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Unpacks {value} into the variables {list}.")
    } else {
        format!("Stores {value} in the variable `{target}`.")
    }
}

pub(super) fn rules() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new(
            "py-def",
            r"^(async\s+)?def\s+(\w+)\s*\(([^)]*)\)\s*(?:->\s*[^:]+)?:\s*(.*)$",
            function_def,
        ),
        LineRule::new(
            "py-class",
            r"^class\s+(\w+)\s*(?:\(([^)]*)\))?\s*:",
            |c, _| match cap(c, 2) {
                "" => format!(
                    "Defines a class named `{}`, a blueprint for creating objects.",
                    cap(c, 1)
                ),
                base => format!(
                    "Defines a class named `{}` that inherits the attributes and methods of `{base}`.",
                    cap(c, 1)
                ),
            },
        ),
        LineRule::new("py-return", r"^return\b\s*(.*)$", |c, lang| match cap(c, 1) {
            "" => "Exits the function without returning a value.".to_string(),
            value => format!(
                "Sends back {} to the code that called the function.",
                describe_value(value, lang)
            ),
        }),
        LineRule::new("py-print", r"^print\s*\((.*)\)\s*$", print_call),
        LineRule::new(
            "py-for-range",
            r"^for\s+(\w+)\s+in\s+range\s*\(([^)]*)\)\s*:",
            range_loop,
        ),
        LineRule::new(
            "py-for-each",
            r"^for\s+(.+?)\s+in\s+(.+?)\s*:",
            for_each,
        ),
        LineRule::new("py-while", r"^while\s+(.+?)\s*:", |c, _| {
            format!(
                "Starts a loop that keeps repeating as long as `{}` is true.",
                cap(c, 1)
            )
        }),
        LineRule::new("py-if", r"^if\s+(.+?)\s*:\s*(.*)$", if_header),
        LineRule::new("py-elif", r"^elif\s+(.+?)\s*:", |c, _| {
            format!(
                "Checks another condition, `{}`, when the earlier conditions were false.",
                cap(c, 1)
            )
        }),
        LineRule::new("py-else", r"^else\s*:", |_, _| {
            "Runs the following block when none of the previous conditions were true.".to_string()
        }),
        LineRule::new("py-try", r"^try\s*:", |_, _| {
            "Starts a block of code that might raise an error so the error can be handled."
                .to_string()
        }),
        LineRule::new(
            "py-except",
            r"^except\b\s*([^:]*?)\s*(?:as\s+(\w+))?\s*:",
            except_clause,
        ),
        LineRule::new("py-finally", r"^finally\s*:", |_, _| {
            "Runs cleanup code whether or not an error occurred.".to_string()
        }),
        LineRule::new(
            "py-from-import",
            r"^from\s+([\w.]+)\s+import\s+(.+)$",
            |c, _| {
                format!(
                    "Imports `{}` from the `{}` module so they can be used directly.",
                    cap(c, 2),
                    cap(c, 1)
                )
            },
        ),
        LineRule::new("py-import", r"^import\s+(.+)$", |c, _| {
            format!(
                "Imports the `{}` module so its functions and classes can be used.",
                cap(c, 1)
            )
        }),
        LineRule::new("py-with", r"^with\s+(.+?)\s*:", |c, _| {
            format!(
                "Opens `{}` as a context that is cleaned up automatically when the block ends.",
                cap(c, 1)
            )
        }),
        LineRule::new(
            "py-lambda",
            r"^(\w+)\s*=\s*lambda\b([^:]*):\s*(.+)$",
            |c, _| {
                format!(
                    "Stores a small anonymous function in `{}` that takes {} and returns `{}`.",
                    cap(c, 1),
                    describe_params(cap(c, 2)),
                    cap(c, 3)
                )
            },
        ),
        LineRule::new(
            "py-comprehension",
            r"^(\w+)\s*=\s*\[\s*(.+?)\s+for\s+(.+?)\s+in\s+(.+?)(?:\s+if\s+(.+?))?\s*\]$",
            comprehension,
        ),
        LineRule::new(
            "py-augmented",
            r"^([\w.\[\]]+)\s*(\*\*|//|[-+*/%])=\s*(.+)$",
            |c, lang| describe_update(cap(c, 1), cap(c, 2), cap(c, 3), lang),
        ),
        LineRule::new(
            "py-assignment",
            r"^([A-Za-z_][\w.]*(?:\[[^\]]*\])?(?:\s*,\s*[A-Za-z_]\w*)*)\s*=\s*([^=].*)$",
            assignment,
        ),
        LineRule::new("py-pass", r"^pass$", |_, _| {
            "A placeholder statement that does nothing. Python needs at least one statement in every block."
                .to_string()
        }),
        LineRule::new("py-break", r"^break$", |_, _| {
            "Exits the nearest loop immediately.".to_string()
        }),
        LineRule::new("py-continue", r"^continue$", |_, _| {
            "Skips the rest of this pass and moves on to the next repetition of the loop."
                .to_string()
        }),
    ])
}
