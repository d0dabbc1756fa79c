use clp_domain::value_objects::ConstructCategory as Cat;

use crate::analysis::patterns::Detector;

pub(super) fn detectors() -> Vec<Detector> {
    [
        Detector::new(
            Cat::Function,
            "Function Definition",
            r"(?m)^\s*(?:async\s+)?def\s+\w+\s*\(",
            "Defines a reusable block of code with `def`. Parameters go in the parentheses and the indented body runs each time the function is called.",
            "def add(a, b): return a + b",
        ),
        Detector::new(
            Cat::DataStructure,
            "List Comprehension",
            r"\[[^\[\]]+\bfor\b[^\[\]]+\bin\b[^\[\]]+\]",
            "Builds a new list in a single expression by looping over an iterable and optionally filtering items.",
            "squares = [x * x for x in range(5)]",
        ),
        Detector::new(
            Cat::Function,
            "Lambda Function",
            r"\blambda\b[^:]*:",
            "Creates a small anonymous function inline. Useful as a short argument to functions such as `sorted` or `map`.",
            "double = lambda x: x * 2",
        ),
        Detector::new(
            Cat::StringFormat,
            "F-String Formatting",
            r#"(?:^|[^\w])[fF]["']"#,
            "An f-string embeds expressions inside `{}` directly in a string literal, so values are formatted into the text when it runs.",
            "message = f\"Total: {total}\"",
        ),
        Detector::new(
            Cat::ErrorHandling,
            "Try/Except Block",
            r"(?s)\btry\s*:.*\bexcept\b",
            "Runs code that might fail inside `try` and handles the failure in `except` instead of crashing the program.",
            "try: value = int(text) ... except ValueError: value = 0",
        ),
        Detector::new(
            Cat::Loop,
            "For Loop",
            r"(?m)^\s*for\s+[\w, ]+\s+in\s+",
            "Repeats the indented block once for every item of a sequence such as a list, string or `range`.",
            "for item in items: print(item)",
        ),
        Detector::new(
            Cat::Loop,
            "While Loop",
            r"(?m)^\s*while\b.*:",
            "Keeps repeating the indented block as long as its condition stays true.",
            "while count < 3: count += 1",
        ),
        Detector::new(
            Cat::Class,
            "Class Definition",
            r"(?m)^\s*class\s+\w+",
            "Defines a blueprint for objects that bundles data (attributes) with behaviour (methods).",
            "class Dog: pass",
        ),
        Detector::new(
            Cat::Import,
            "Import Statement",
            r"(?m)^\s*(?:import\s+\w|from\s+[\w.]+\s+import\b)",
            "Loads a module so its functions and classes can be used in this file.",
            "import math",
        ),
        Detector::new(
            Cat::Output,
            "Print Output",
            r"\bprint\s*\(",
            "Writes values to the console, which is the simplest way to see what a program is doing.",
            "print(\"Hello\")",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
