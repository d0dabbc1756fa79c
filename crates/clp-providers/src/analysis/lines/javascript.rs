//! JavaScript and React line rules

use clp_domain::value_objects::SupportedLanguage;
use regex::Captures;

use crate::analysis::lines::value::{describe_params, describe_value, param_names};
use crate::analysis::patterns::{LineRule, RuleSet, cap};

fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn function_decl(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let kind = if c.get(1).is_some() {
        "an asynchronous function"
    } else {
        "a function"
    };
    match cap(c, 2) {
        "" => format!(
            "Creates {kind} without a name that takes {}.",
            describe_params(cap(c, 3))
        ),
        name => format!(
            "Declares {kind} named `{name}` that takes {}.",
            describe_params(cap(c, 3))
        ),
    }
}

fn arrow_binding(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let name = cap(c, 1);
    let kind = if c.get(2).is_some() {
        "an asynchronous arrow function"
    } else {
        "an arrow function"
    };
    let params = match (c.get(3), c.get(4)) {
        (_, Some(single)) => describe_params(single.as_str()),
        (Some(list), None) => describe_params(list.as_str()),
        (None, None) => describe_params(""),
    };
    let body = cap(c, 5).trim_end_matches(';').trim();
    if body.is_empty() || body.starts_with('{') {
        format!("Defines `{name}` as {kind} that takes {params}.")
    } else {
        format!(
            "Defines `{name}` as {kind} that takes {params} and returns {}.",
            describe_value(body, language)
        )
    }
}

fn destructuring(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let pattern = cap(c, 1);
    let source = cap(c, 2);
    let names = param_names(pattern.trim_start_matches('[').trim_end_matches(']'));
    if pattern.starts_with('[') {
        format!(
            "Unpacks the first items of `{source}` into {}.",
            quoted_list(&names)
        )
    } else {
        format!(
            "Unpacks the properties {} from `{source}` into variables of the same names.",
            quoted_list(&names)
        )
    }
}

fn declaration(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let kind = match cap(c, 1) {
        "const" => "the constant",
        "let" => "the block-scoped variable",
        _ => "the function-scoped variable",
    };
    format!(
        "Declares {kind} `{}` and sets it to {}.",
        cap(c, 2),
        describe_value(cap(c, 3), language)
    )
}

fn array_method(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let array = cap(c, 2);
    let action = match cap(c, 3) {
        "map" => format!("builds a new array by transforming each element of `{array}`"),
        "filter" => format!("keeps only the elements of `{array}` that pass a test"),
        "reduce" => format!("combines all elements of `{array}` into a single value"),
        "forEach" => format!("runs a function once for each element of `{array}`"),
        "find" => format!("looks up the first element of `{array}` that passes a test"),
        "some" => format!("checks whether any element of `{array}` passes a test"),
        "every" => format!("checks whether every element of `{array}` passes a test"),
        other => format!("calls `{other}` on `{array}`"),
    };
    match cap(c, 1) {
        "" => format!("Uses `.{}`, which {action}.", cap(c, 3)),
        target => format!(
            "Uses `.{}`, which {action}, and stores the result in `{target}`.",
            cap(c, 3)
        ),
    }
}

fn console_call(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let value = match cap(c, 2) {
        "" => "an empty line".to_string(),
        args => describe_value(args, language),
    };
    match cap(c, 1) {
        "error" => format!("Writes {value} to the console as an error message."),
        "warn" => format!("Writes {value} to the console as a warning."),
        "table" => format!("Displays {value} as a table in the console."),
        _ => format!("Writes {value} to the console."),
    }
}

fn component(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let name = cap(c, 1);
    let props = param_names(cap(c, 2));
    if props.is_empty() {
        format!("Defines the `{name}` component, a function that returns JSX to display.")
    } else {
        format!(
            "Defines the `{name}` component, which receives the props {} and returns JSX to display.",
            quoted_list(&props)
        )
    }
}

fn jsx_element(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let tag = cap(c, 1);
    if tag.starts_with(|ch: char| ch.is_ascii_uppercase()) {
        format!("Renders the `{tag}` component here.")
    } else {
        format!("Renders a `<{tag}>` element.")
    }
}

/// Rules shared by JavaScript and React
pub(super) fn js_rules() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new(
            "js-import-from",
            r#"^import\s+(.+?)\s+from\s+['"]([^'"]+)['"]"#,
            |c, _| format!("Imports `{}` from the `{}` module.", cap(c, 1), cap(c, 2)),
        ),
        LineRule::new("js-import-bare", r#"^import\s+['"]([^'"]+)['"]"#, |c, _| {
            format!("Loads the `{}` module for its side effects.", cap(c, 1))
        }),
        LineRule::new(
            "js-require",
            r#"^(?:const|let|var)\s+(.+?)\s*=\s*require\s*\(\s*['"]([^'"]+)['"]\s*\)"#,
            |c, _| {
                format!(
                    "Loads the `{}` module with `require` and stores it in `{}`.",
                    cap(c, 2),
                    cap(c, 1)
                )
            },
        ),
        LineRule::new(
            "js-export-default",
            r"^export\s+default\s+(\w+)\s*;?$",
            |c, _| {
                format!(
                    "Makes `{}` the default export of this module so other files can import it.",
                    cap(c, 1)
                )
            },
        ),
        LineRule::new(
            "js-function",
            r"^(?:export\s+(?:default\s+)?)?(async\s+)?function\s*\*?\s*(\w*)\s*\(([^)]*)\)",
            function_decl,
        ),
        LineRule::new(
            "js-arrow",
            r"^(?:export\s+)?(?:const|let|var)\s+(\w+)\s*=\s*(async\s+)?(?:\(([^()]*)\)|(\w+))\s*=>\s*(.*)$",
            arrow_binding,
        ),
        LineRule::new(
            "js-await",
            r"^(?:const|let|var)\s+(\w+|\{[^}]*\}|\[[^\]]*\])\s*=\s*await\s+(.+?)\s*;?$",
            |c, _| {
                format!(
                    "Waits for `{}` to finish and stores its result in `{}`.",
                    cap(c, 2),
                    cap(c, 1)
                )
            },
        ),
        LineRule::new(
            "js-array-method",
            r"^(?:(?:const|let|var)\s+(\w+)\s*=\s*)?([\w.]+)\.(map|filter|reduce|forEach|find|some|every)\s*\(",
            array_method,
        ),
        LineRule::new(
            "js-destructuring",
            r"^(?:const|let|var)\s+(\{[^}]*\}|\[[^\]]*\])\s*=\s*(.+?)\s*;?$",
            destructuring,
        ),
        LineRule::new(
            "js-declaration",
            r"^(const|let|var)\s+(\w+)\s*=\s*(.+?)\s*;?$",
            declaration,
        ),
        LineRule::new("js-declaration-empty", r"^(?:let|var)\s+(\w+)\s*;?$", |c, _| {
            format!(
                "Declares the variable `{}` without a value, so it starts as `undefined`.",
                cap(c, 1)
            )
        }),
        LineRule::new(
            "js-console",
            r"^console\.(log|error|warn|info|table)\s*\((.*)\)\s*;?$",
            console_call,
        ),
        LineRule::new(
            "js-for-of",
            r"^for\s*\(\s*(?:const|let|var)\s+(.+?)\s+(of|in)\s+(.+?)\s*\)",
            |c, _| {
                if cap(c, 2) == "of" {
                    format!(
                        "Starts a loop that repeats once for each value in `{}`, calling it `{}`.",
                        cap(c, 3),
                        cap(c, 1)
                    )
                } else {
                    format!(
                        "Starts a loop that repeats once for each property name of `{}`, calling it `{}`.",
                        cap(c, 3),
                        cap(c, 1)
                    )
                }
            },
        ),
        LineRule::new("js-promise", r"\bnew\s+Promise\s*\(", |_, _| {
            "Creates a new promise that settles when the asynchronous work finishes.".to_string()
        }),
        LineRule::new("js-then", r"\.(then|catch|finally)\s*\(", |c, _| {
            let step = match cap(c, 1) {
                "then" => "when the promise succeeds, receiving its result",
                "catch" => "when the promise fails, receiving the error",
                _ => "after the promise settles, whatever the outcome",
            };
            format!("Registers a callback that runs {step}.")
        }),
        LineRule::new(
            "js-class",
            r"^(?:export\s+(?:default\s+)?)?class\s+(\w+)(?:\s+extends\s+([\w.]+))?",
            |c, _| match cap(c, 2) {
                "" => format!("Declares the `{}` class, a blueprint for objects.", cap(c, 1)),
                base => format!(
                    "Declares the `{}` class, which extends `{base}` and inherits its behaviour.",
                    cap(c, 1)
                ),
            },
        ),
        LineRule::new("js-constructor", r"^constructor\s*\(([^)]*)\)", |c, _| {
            format!(
                "Defines the constructor, which runs when a new object is created with `new` and takes {}.",
                describe_params(cap(c, 1))
            )
        }),
    ])
}

/// Method definitions, tried after the brace rules so `if (...) {` is not one
pub(super) fn js_tail() -> RuleSet {
    RuleSet::from_rules([LineRule::new(
        "js-method",
        r"^(async\s+)?(\w+)\s*\(([^)]*)\)\s*\{\s*$",
        |c, _| {
            format!(
                "Defines the method `{}`, which takes {}.",
                cap(c, 2),
                describe_params(cap(c, 3))
            )
        },
    )])
}

/// React rules tried before the JavaScript table
pub(super) fn react_rules() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new(
            "react-import",
            r#"^import\s+(.+?)\s+from\s+['"]react(?:-dom)?(?:/[\w-]+)?['"]"#,
            |c, _| format!("Imports `{}` from the React library.", cap(c, 1)),
        ),
        LineRule::new(
            "react-use-state",
            r"^(?:const|let)\s+\[\s*(\w+)\s*,\s*(\w+)\s*\]\s*=\s*(?:React\.)?useState\s*(?:<[^>]*>)?\s*\((.*)\)\s*;?$",
            |c, lang| {
                let initial = match cap(c, 3) {
                    "" => "`undefined`".to_string(),
                    value => describe_value(value, lang),
                };
                format!(
                    "Creates a piece of state called `{}`, starting at {initial}. Calling `{}` updates it and re-renders the component.",
                    cap(c, 1),
                    cap(c, 2)
                )
            },
        ),
        LineRule::new("react-use-effect", r"^(?:React\.)?useEffect\s*\(", |_, _| {
            "Registers a side effect that React runs after the component renders.".to_string()
        }),
        LineRule::new(
            "react-hook",
            r"^(?:(?:const|let)\s+(.+?)\s*=\s*)?(?:React\.)?(use[A-Z]\w*)\s*\(",
            |c, _| match cap(c, 1) {
                "" => format!("Calls the `{}` hook.", cap(c, 2)),
                target => format!(
                    "Calls the `{}` hook and stores the result in `{target}`.",
                    cap(c, 2)
                ),
            },
        ),
        LineRule::new(
            "react-component-function",
            r"^(?:export\s+(?:default\s+)?)?function\s+([A-Z]\w*)\s*\(([^)]*)\)",
            component,
        ),
        LineRule::new(
            "react-component-arrow",
            r"^(?:export\s+)?(?:const|let)\s+([A-Z]\w*)\s*=\s*\(?([^()=]*)\)?\s*=>",
            component,
        ),
        LineRule::new(
            "react-class-component",
            r"^(?:export\s+(?:default\s+)?)?class\s+(\w+)\s+extends\s+(?:React\.)?(?:Pure)?Component\b",
            |c, _| {
                format!(
                    "Defines `{}` as a class component whose `render` method returns JSX.",
                    cap(c, 1)
                )
            },
        ),
        LineRule::new("react-return-jsx", r"^return\s*\(?\s*(?:<.*)?$", |_, _| {
            "Returns the JSX that describes what this component displays.".to_string()
        }),
        LineRule::new(
            "react-event",
            r"\bon([A-Z]\w*)\s*=\s*\{([^}]*)\}",
            |c, _| {
                format!(
                    "Attaches `{}` as the handler for the `{}` event.",
                    cap(c, 2),
                    cap(c, 1).to_lowercase()
                )
            },
        ),
        LineRule::new("react-list", r"\{\s*([\w.]+)\.map\s*\(", |c, _| {
            format!("Renders one element for each item in `{}`.", cap(c, 1))
        }),
        LineRule::new(
            "react-conditional",
            r"^\{?\s*(.+?)\s*&&\s*\(?\s*<",
            |c, _| format!("Renders the element only when `{}` is true.", cap(c, 1)),
        ),
        LineRule::new("react-close-tag", r"^</([\w.]*)>$", |c, _| match cap(c, 1) {
            "" => "Closes the fragment that groups the elements above.".to_string(),
            tag => format!("Closes the `<{tag}>` element."),
        }),
        LineRule::new("react-fragment", r"^<>$", |_, _| {
            "Opens a fragment that groups elements without adding an extra node.".to_string()
        }),
        LineRule::new("react-element", r"^<([A-Za-z][\w.]*)", jsx_element),
    ])
}
