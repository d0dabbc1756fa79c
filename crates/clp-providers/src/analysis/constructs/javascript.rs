use clp_domain::value_objects::ConstructCategory as Cat;

use crate::analysis::patterns::Detector;

pub(super) fn detectors() -> Vec<Detector> {
    [
        Detector::new(
            Cat::Function,
            "Arrow Function",
            r"(?:\([^()]*\)|\b\w+)\s*=>",
            "A compact function syntax, `(params) => expression`, that also keeps the surrounding `this`.",
            "const double = (n) => n * 2;",
        ),
        Detector::new(
            Cat::Declaration,
            "Destructuring Assignment",
            r"\b(?:const|let|var)\s*[\[{][^=]*[\]}]\s*=",
            "Unpacks values from arrays or properties from objects into separate variables in one statement.",
            "const { name, age } = user;",
        ),
        Detector::new(
            Cat::Function,
            "Array Higher-Order Methods",
            r"\.(?:map|filter|reduce|forEach|find|some|every|sort)\s*\(",
            "Array methods that take a callback and apply it to each element, returning a new value instead of using a manual loop.",
            "const evens = nums.filter((n) => n % 2 === 0);",
        ),
        Detector::new(
            Cat::StringFormat,
            "Template Literal",
            r"`[^`]*\$\{[^}]*\}[^`]*`",
            "Backtick strings that embed expressions with `${}` and may span several lines.",
            "const msg = `Hi ${name}`;",
        ),
        Detector::new(
            Cat::AsyncPattern,
            "Async/Await",
            r"\basync\b|\bawait\b",
            "`async` functions return promises and `await` pauses inside them until a promise settles, so asynchronous code reads top to bottom.",
            "const data = await fetch(url);",
        ),
        Detector::new(
            Cat::AsyncPattern,
            "Promise Chaining",
            r"\.then\s*\(|\.catch\s*\(|\bnew\s+Promise\b",
            "Handles the eventual result of an asynchronous operation by chaining `.then` for success and `.catch` for errors.",
            "fetch(url).then((r) => r.json());",
        ),
        Detector::new(
            Cat::Function,
            "Function Declaration",
            r"\bfunction\s*\*?\s*\w*\s*\(",
            "Defines a named, hoisted function that can be called before its definition appears in the file.",
            "function greet(name) { return 'Hi ' + name; }",
        ),
        Detector::new(
            Cat::Declaration,
            "Block-Scoped Declaration",
            r"\b(?:let|const)\s+[\w\[{]",
            "`let` and `const` declare variables that only exist inside the enclosing block. `const` bindings cannot be reassigned.",
            "const limit = 10;",
        ),
        Detector::new(
            Cat::Import,
            "Module Import",
            r#"(?m)^\s*import\b|\brequire\s*\(\s*['"]"#,
            "Loads code exported by another module or package.",
            "import fs from 'fs';",
        ),
        Detector::new(
            Cat::Output,
            "Console Output",
            r"\bconsole\.(?:log|error|warn|info|table)\s*\(",
            "Writes values to the browser or Node.js console for debugging.",
            "console.log(total);",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
