use clp_domain::value_objects::ConstructCategory as Cat;

use crate::analysis::patterns::Detector;

pub(super) fn detectors() -> Vec<Detector> {
    [
        Detector::new(
            Cat::Function,
            "Function Definition",
            r"(?m)^\s*(?:static\s+|inline\s+|const\s+|unsigned\s+)*(?:void|int|char|float|double|long|short|bool|size_t|struct\s+\w+)\s*\*?\s*\w+\s*\([^;{]*\)\s*\{?\s*$",
            "Declares a named function with a return type and a parameter list. The body between braces runs when the function is called.",
            "int square(int x) { return x * x; }",
        ),
        Detector::new(
            Cat::Pointer,
            "Pointer Usage",
            r"\b(?:int|char|float|double|long|short|void|struct\s+\w+)\s*\*+\s*\w+|->|(?:^|[^&\w])&[A-Za-z_]\w*",
            "A pointer stores the memory address of another value. `*` declares or dereferences a pointer and `&` takes an address.",
            "int *p = &value;",
        ),
        Detector::new(
            Cat::Memory,
            "Dynamic Memory",
            r"\b(?:malloc|calloc|realloc|free)\s*\(",
            "Requests memory from the heap at run time. Every block obtained with `malloc` must be released with `free`.",
            "int *data = malloc(10 * sizeof(int));",
        ),
        Detector::new(
            Cat::Import,
            "Header Include",
            r"(?m)^\s*#\s*include\b",
            "Pulls in declarations from a header file, such as `printf` from `<stdio.h>`.",
            "#include <stdio.h>",
        ),
        Detector::new(
            Cat::Loop,
            "For Loop",
            r"\bfor\s*\(",
            "Repeats a block with an initializer, a condition checked before each pass, and an update step.",
            "for (int i = 0; i < n; i++) { ... }",
        ),
        Detector::new(
            Cat::Loop,
            "While Loop",
            r"\bwhile\s*\(",
            "Repeats a block as long as its condition is non-zero.",
            "while (n > 0) { n--; }",
        ),
        Detector::new(
            Cat::Output,
            "Formatted Output",
            r"\b(?:printf|puts|putchar|fprintf)\s*\(",
            "Prints text to standard output. Format specifiers such as `%d` and `%s` are replaced by the following arguments.",
            "printf(\"%d\\n\", total);",
        ),
        Detector::new(
            Cat::DataStructure,
            "Struct Definition",
            r"\b(?:typedef\s+)?struct\s+\w*\s*\{",
            "Groups related values of different types under one name.",
            "struct Point { int x; int y; };",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
