use clp_domain::value_objects::ConstructCategory as Cat;

use crate::analysis::patterns::Detector;

pub(super) fn detectors() -> Vec<Detector> {
    [
        Detector::new(
            Cat::Class,
            "Class Definition",
            r"\b(?:class|interface|enum|record)\s+[A-Z]\w*",
            "Every Java program is organised into classes. A class groups fields and methods that describe one kind of object.",
            "public class Counter { private int count; }",
        ),
        Detector::new(
            Cat::Function,
            "Main Method",
            r"\bpublic\s+static\s+void\s+main\s*\(",
            "`public static void main(String[] args)` is the entry point the JVM calls when the program starts.",
            "public static void main(String[] args) { ... }",
        ),
        Detector::new(
            Cat::Output,
            "Console Output",
            r"\bSystem\.(?:out|err)\.(?:println|print|printf)\s*\(",
            "Prints text to the console. `println` adds a newline after the text.",
            "System.out.println(\"Hello\");",
        ),
        Detector::new(
            Cat::Loop,
            "For Loop",
            r"\bfor\s*\(",
            "Repeats a block either with a counter (`for (int i = 0; ...)`) or once per element (`for (String s : list)`).",
            "for (int i = 0; i < 5; i++) { ... }",
        ),
        Detector::new(
            Cat::ErrorHandling,
            "Exception Handling",
            r"\btry\s*\{|\bcatch\s*\(|\bthrows?\b",
            "Exceptions signal errors. `try`/`catch` handles them and `throws` declares which ones a method may raise.",
            "try { read(); } catch (IOException e) { ... }",
        ),
        Detector::new(
            Cat::DataStructure,
            "Generics",
            r"\b[A-Z]\w*\s*<\s*(?:[A-Z]\w*|\?)[\w\s,<>?]*>",
            "Generic types such as `List<String>` let collections hold a specific element type checked by the compiler.",
            "List<String> names = new ArrayList<>();",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
