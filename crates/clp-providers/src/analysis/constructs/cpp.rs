use clp_domain::value_objects::ConstructCategory as Cat;

use crate::analysis::patterns::Detector;

pub(super) fn detectors() -> Vec<Detector> {
    [
        Detector::new(
            Cat::Output,
            "Stream Output",
            r"#\s*include\s*<iostream>|\b(?:std::)?(?:cout|cerr)\s*<<",
            "`std::cout` writes to the console using the `<<` insertion operator from `<iostream>`.",
            "std::cout << \"Hi\" << std::endl;",
        ),
        Detector::new(
            Cat::Import,
            "Standard Namespace",
            r"\bstd::|\busing\s+namespace\s+std\b",
            "The standard library lives in the `std` namespace. `std::` names it explicitly and `using namespace std;` imports it.",
            "std::vector<int> values;",
        ),
        Detector::new(
            Cat::Class,
            "Class Definition",
            r"\b(?:class|struct)\s+[A-Za-z_]\w*\s*(?::[^{;]*)?\{",
            "Classes combine data members and member functions, with `public`/`private` controlling access.",
            "class Shape { public: virtual double area() const = 0; };",
        ),
        Detector::new(
            Cat::Function,
            "Template",
            r"\btemplate\s*<",
            "Templates write a function or class once for any type. The compiler generates a version per type used.",
            "template <typename T> T max(T a, T b);",
        ),
        Detector::new(
            Cat::Declaration,
            "References",
            r"\b(?:int|char|float|double|long|bool|auto|string|std::\w+|[A-Z]\w*)(?:<[^>]*>)?\s*&\s*\w+",
            "A reference `T&` is another name for an existing object, so functions can modify arguments without copying them.",
            "void reset(int& value) { value = 0; }",
        ),
        Detector::new(
            Cat::Loop,
            "For Loop",
            r"\bfor\s*\(",
            "Repeats a block with a counter or, in the range-based form `for (auto x : v)`, once per element.",
            "for (auto& item : items) { ... }",
        ),
        Detector::new(
            Cat::Memory,
            "Dynamic Memory",
            r"\bnew\s+[A-Za-z_]|\bdelete\s*(?:\[\s*\])?\s*\w|\b(?:std::)?(?:make_unique|make_shared)\s*<",
            "`new` allocates an object on the heap and `delete` frees it. Smart pointers such as `std::unique_ptr` free memory automatically.",
            "auto p = std::make_unique<Node>();",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
