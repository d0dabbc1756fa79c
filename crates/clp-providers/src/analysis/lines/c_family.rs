//! C, C++ and Java line rules

use clp_domain::value_objects::SupportedLanguage;
use regex::Captures;

use crate::analysis::lines::value::{describe_params, describe_value};
use crate::analysis::patterns::{LineRule, RuleSet, cap};

fn header_purpose(header: &str) -> &'static str {
    match header {
        "stdio.h" | "cstdio" => "standard input/output functions such as `printf` and `scanf`",
        "stdlib.h" | "cstdlib" => "memory allocation and utilities such as `malloc` and `free`",
        "string.h" | "cstring" => "string functions such as `strlen` and `strcpy`",
        "math.h" | "cmath" => "math functions such as `sqrt` and `pow`",
        "stdbool.h" => "the `bool` type with `true` and `false`",
        "ctype.h" | "cctype" => "character tests such as `isdigit` and `toupper`",
        "time.h" | "ctime" => "date and time functions",
        "iostream" => "console input/output with `std::cout` and `std::cin`",
        "vector" => "the `std::vector` resizable array",
        "string" => "the `std::string` text type",
        "map" | "unordered_map" => "key-value containers",
        "algorithm" => "ready-made algorithms such as `std::sort`",
        "memory" => "smart pointers such as `std::unique_ptr`",
        _ => "declarations used by the rest of this file",
    }
}

fn include(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let header = cap(c, 1);
    format!(
        "Includes the `{header}` header, which provides {}.",
        header_purpose(header)
    )
}

fn format_output(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let args = cap(c, 1);
    if args.contains('%') {
        "Prints formatted output to the screen, filling each `%` placeholder with the values that follow."
            .to_string()
    } else {
        format!("Prints {} to the screen.", describe_value(args, language))
    }
}

fn allocation(c: &Captures<'_>, _: SupportedLanguage) -> String {
    format!(
        "Allocates memory on the heap with `{}` and stores its address in `{}`. The memory must be released later with `free`.",
        cap(c, 2),
        cap(c, 1)
    )
}

fn pointer_decl(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let head = format!("Declares `{}` as a pointer to `{}`", cap(c, 2), cap(c, 1));
    match cap(c, 3) {
        "" => format!("{head}. It does not point anywhere useful until it is assigned."),
        value => format!("{head} and points it at {}.", describe_value(value, language)),
    }
}

fn stream_output(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let pieces = cap(c, 1);
    let newline = if pieces.contains("endl") || pieces.contains("\\n") {
        " followed by a new line"
    } else {
        ""
    };
    format!("Prints `{pieces}` to the console using the `<<` operator{newline}.")
}

fn class_head(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let name = cap(c, 2);
    let mut sentence = format!("Declares the `{name}` {}", cap(c, 1));
    if let Some(base) = c.get(3) {
        sentence.push_str(&format!(" that extends `{}`", base.as_str().trim()));
    }
    if let Some(interfaces) = c.get(4) {
        sentence.push_str(&format!(" and implements `{}`", interfaces.as_str().trim()));
    }
    sentence.push_str(", a blueprint for objects that groups fields and methods.");
    sentence
}

fn new_object(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let (target, class) = (cap(c, 1), cap(c, 2));
    let what = if c.get(3).is_some() {
        format!("a new array of `{class}`")
    } else {
        format!("a new `{class}` object")
    };
    match language {
        SupportedLanguage::Cpp => format!(
            "Creates {what} on the heap and stores its address in `{target}`. It must be released with `delete`."
        ),
        _ => format!(
            "Creates {what} and stores a reference to it in `{target}`. The garbage collector frees it when it is no longer used."
        ),
    }
}

fn function_signature(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let return_type = cap(c, 1).trim_end_matches(['*', '&']).trim();
    let name = cap(c, 2);
    let params = describe_params(cap(c, 3));
    let returns = if return_type == "void" {
        "returns nothing".to_string()
    } else {
        format!("returns a `{return_type}`")
    };
    let kind = if language == SupportedLanguage::Java {
        "method"
    } else {
        "function"
    };
    format!("Defines the {kind} `{name}`, which takes {params} and {returns}.")
}

fn declaration(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let (kind, name) = (cap(c, 1), cap(c, 2));
    match cap(c, 3) {
        "" => format!("Declares the `{kind}` variable `{name}` without giving it a value yet."),
        value => format!(
            "Declares the `{kind}` variable `{name}` and sets it to {}.",
            describe_value(value, language)
        ),
    }
}

fn array_decl(c: &Captures<'_>, language: SupportedLanguage) -> String {
    let size = match cap(c, 3) {
        "" => String::new(),
        n => format!("{n} "),
    };
    let head = format!(
        "Declares `{}`, an array of {size}`{}` values",
        cap(c, 2),
        cap(c, 1)
    );
    match cap(c, 4) {
        "" => format!("{head}."),
        value => format!("{head}, initialised with {}.", describe_value(value, language)),
    }
}

/// C rules, also used by C++ after its own heads
pub(super) fn c_heads() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new("c-include", r#"^#\s*include\s*[<"]([^>"]+)[>"]"#, include),
        LineRule::new(
            "c-define",
            r"^#\s*define\s+(\w+)(?:\s+(.*))?$",
            |c, _| match cap(c, 2) {
                "" => format!("Defines the preprocessor symbol `{}`.", cap(c, 1)),
                value => format!(
                    "Defines `{}` as a constant: the preprocessor replaces it with `{value}` before compiling.",
                    cap(c, 1)
                ),
            },
        ),
        LineRule::new(
            "c-main",
            r"^(?:int|void)\s+main\s*\(([^)]*)\)\s*\{?\s*$",
            |_, lang| {
                format!(
                    "Starts the `main` function, where every {} program begins running.",
                    lang.display_name()
                )
            },
        ),
        LineRule::new("c-printf", r"^printf\s*\((.*)\)\s*;?$", format_output),
        LineRule::new("c-puts", r"^puts\s*\((.*)\)\s*;?$", |c, lang| {
            format!(
                "Prints {} followed by a new line.",
                describe_value(cap(c, 1), lang)
            )
        }),
        LineRule::new("c-scanf", r"^scanf\s*\((.*)\)\s*;?$", |_, _| {
            "Reads input typed by the user and stores it at the addresses given after the format string."
                .to_string()
        }),
        LineRule::new(
            "c-malloc",
            r"^(?:[\w\s]+\*+\s*)?\*?\s*(\w+)\s*=\s*(?:\([^)]*\)\s*)?(malloc|calloc|realloc)\s*\((.*)\)\s*;?$",
            allocation,
        ),
        LineRule::new("c-free", r"^free\s*\(\s*(\w+)\s*\)\s*;?$", |c, _| {
            format!(
                "Releases the heap memory pointed to by `{}` so it can be reused.",
                cap(c, 1)
            )
        }),
        LineRule::new(
            "c-pointer",
            r"^(?:const\s+)?(int|char|float|double|long|short|void|struct\s+\w+)\s*\*+\s*(\w+)\s*(?:=\s*(.+?))?\s*;$",
            pointer_decl,
        ),
        LineRule::new(
            "c-struct",
            r"^(?:typedef\s+)?struct\s+(\w+)\s*\{?\s*$",
            |c, _| {
                format!(
                    "Begins the definition of the `{}` structure, which groups related fields.",
                    cap(c, 1)
                )
            },
        ),
    ])
}

/// C++ rules tried before the exception and C rules
pub(super) fn cpp_heads() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new("cpp-using", r"^using\s+namespace\s+(\w+)\s*;", |c, _| {
            format!(
                "Makes every name in the `{0}` namespace usable without the `{0}::` prefix.",
                cap(c, 1)
            )
        }),
        LineRule::new("cpp-cout", r"^(?:std::)?(?:cout|cerr)\s*<<\s*(.+?)\s*;?$", stream_output),
        LineRule::new("cpp-cin", r"^(?:std::)?cin\s*>>\s*(.+?)\s*;?$", |c, _| {
            format!("Reads input from the keyboard into `{}`.", cap(c, 1))
        }),
        LineRule::new("cpp-template", r"^template\s*<([^>]*)>", |c, _| {
            format!(
                "Makes the following definition a template over `{}`, so it works with any type.",
                cap(c, 1)
            )
        }),
        LineRule::new(
            "cpp-class",
            r"^(class|struct)\s+(\w+)\s*(?::\s*(?:public|private|protected)?\s*([\w:]+))?\s*\{?\s*$",
            |c, lang| {
                let base = cap(c, 3);
                let mut sentence = format!("Declares the `{}` {}", cap(c, 2), cap(c, 1));
                if !base.is_empty() {
                    sentence.push_str(&format!(" that inherits from `{base}`"));
                }
                sentence.push_str(&format!(
                    ", grouping data and the {} functions that work on it.",
                    lang.display_name()
                ));
                sentence
            },
        ),
        LineRule::new("cpp-access", r"^(public|private|protected)\s*:$", |c, _| {
            let access = match cap(c, 1) {
                "public" => "public: usable from outside the class",
                "private" => "private: usable only inside the class",
                _ => "protected: usable by the class and its subclasses",
            };
            format!("Marks the following members as {access}.")
        }),
        LineRule::new(
            "cpp-delete",
            r"^delete\s*(\[\s*\])?\s*(\w+)\s*;?$",
            |c, _| {
                format!(
                    "Frees the heap memory of `{}` that was allocated with `new`.",
                    cap(c, 2)
                )
            },
        ),
    ])
}

/// Java rules tried before the exception and brace rules
pub(super) fn java_heads() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new("java-package", r"^package\s+([\w.]+)\s*;", |c, _| {
            format!("Declares that this file belongs to the `{}` package.", cap(c, 1))
        }),
        LineRule::new("java-import", r"^import\s+(?:static\s+)?([\w.*]+)\s*;", |c, _| {
            format!(
                "Imports `{}` so it can be used by its short name.",
                cap(c, 1)
            )
        }),
        LineRule::new(
            "java-main",
            r"^public\s+static\s+void\s+main\s*\(",
            |_, _| {
                "Declares the `main` method, the entry point the Java Virtual Machine calls to start the program."
                    .to_string()
            },
        ),
        LineRule::new(
            "java-class",
            r"^(?:(?:public|private|protected|abstract|final|static)\s+)*(class|interface|enum|record)\s+(\w+)(?:\s+extends\s+(\w+))?(?:\s+implements\s+([\w, ]+?))?\s*\{?\s*$",
            class_head,
        ),
        LineRule::new(
            "java-print",
            r"^System\.(?:out|err)\.(println|print|printf)\s*\((.*)\)\s*;?$",
            |c, lang| {
                let newline = if cap(c, 1) == "println" {
                    " followed by a new line"
                } else {
                    ""
                };
                format!(
                    "Prints {} to the console{newline}.",
                    describe_value(cap(c, 2), lang)
                )
            },
        ),
    ])
}

/// Declarations and definitions tried after the brace rules
pub(super) fn declarations() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new(
            "decl-range-for",
            r"^for\s*\(\s*(?:final\s+|const\s+)?[\w:<>]+\s*&?\s*(\w+)\s*:\s*(.+?)\s*\)",
            |c, _| {
                format!(
                    "Starts a loop that repeats once for each element of `{}`, naming the current element `{}`.",
                    cap(c, 2),
                    cap(c, 1)
                )
            },
        ),
        LineRule::new(
            "decl-new",
            r"^(?:[\w:<>\[\]]+[\s*&]+)?(\w+)\s*=\s*new\s+([\w:]+)(?:<[^>]*>)?\s*(\[[^\]]*\])?",
            new_object,
        ),
        LineRule::new(
            "decl-array",
            r"^(?:const\s+)?(\w+)\s+(\w+)\s*\[\s*(\w*)\s*\]\s*(?:=\s*(.+?))?\s*;$",
            array_decl,
        ),
        LineRule::new(
            "decl-signature",
            r"^(?:(?:public|private|protected|static|final|inline|virtual|extern|const|unsigned|abstract|synchronized)\s+)*([\w:<>,]+[\s*&]+)(\w+)\s*\(([^)]*)\)\s*(?:const\s*)?(?:throws\s+[\w, ]+)?\s*\{?\s*$",
            function_signature,
        ),
        LineRule::new(
            "decl-prototype",
            r"^(?:(?:static|extern|const|unsigned)\s+)*[\w:<>]+[\s*&]+(\w+)\s*\([^)]*\)\s*;$",
            |c, _| {
                format!(
                    "Declares the function `{}` so it can be called before its full definition appears.",
                    cap(c, 1)
                )
            },
        ),
        LineRule::new(
            "decl-variable",
            r"^(?:(?:const|static|unsigned|signed|final|private|public|protected)\s+)*(int|char|float|double|long|short|bool|boolean|String|string|auto|size_t|std::\w+(?:<[^;]*>)?|[A-Z]\w*(?:<[^;]*>)?)\s+(\w+)\s*(?:=\s*(.+?))?\s*;$",
            declaration,
        ),
    ])
}
