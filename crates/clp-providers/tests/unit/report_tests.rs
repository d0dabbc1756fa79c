//! Tests for report synthesis through the pattern analyzer

use clp_application::domain_services::CodeAnalyzer;
use clp_domain::entities::ExplanationReport;
use clp_domain::value_objects::{ExplanationSource, SupportedLanguage};
use clp_providers::analysis::PatternAnalyzer;
use clp_providers::analysis::report::{Purpose, find_function};
use proptest::prelude::*;

fn analyze(code: &str, language: SupportedLanguage) -> ExplanationReport {
    PatternAnalyzer::new()
        .analyze(code, language)
        .expect("local analysis never fails")
}

#[test]
fn test_greeting_function_report() {
    let report = analyze(
        "def greet(name): return f'Hello, {name}!'",
        SupportedLanguage::Python,
    );

    assert!(report.overview_text.contains("greeting"), "{}", report.overview_text);
    assert!(report.constructs_section.contains("F-String Formatting"));
    assert_eq!(report.step_count(), 1);
    assert!(report.example_section.contains("print(greet(\"Alice\"))"));
    assert!(report.example_section.contains("Hello, Alice!"));
    assert_eq!(report.source, ExplanationSource::LocalPatternAnalysis);
    assert_eq!(report.language_label, "Python");
}

#[test]
fn test_c_loop_report() {
    let report = analyze(
        "for (int i=0;i<10;i++) { printf(\"%d\",i); }",
        SupportedLanguage::C,
    );

    assert_eq!(report.step_count(), 1);
    assert!(report.step_by_step_section.starts_with("1. Line 1: `for"));
    assert!(report.step_by_step_section.contains("loop"));
    assert!(report.step_by_step_section.contains("repeats"));
    assert!(!report.constructs_section.contains("Pointer"));
    assert!(report.example_section.starts_with("Run this code directly:"));
    assert!(report.example_section.contains("```c\n"));
}

#[test]
fn test_empty_constructs_section_explains_general_reading() {
    let report = analyze("x = 1", SupportedLanguage::Python);
    assert!(report.constructs.is_empty());
    assert!(report.constructs_section.contains("sequential execution"));
    assert!(report.constructs_section.contains("data flow"));
    assert!(report.constructs_section.contains("modularity"));
}

#[test]
fn test_constructs_section_lists_each_match() {
    let report = analyze("int *p = malloc(4);", SupportedLanguage::C);
    for construct in &report.constructs {
        assert!(report.constructs_section.contains(&format!("**{}**", construct.label)));
    }
    assert_eq!(
        report.constructs_section.lines().count(),
        report.constructs.len()
    );
}

#[test]
fn test_steps_keep_original_line_numbers() {
    let code = "# setup\nx = 1\n\n# show it\nprint(x)";
    let report = analyze(code, SupportedLanguage::Python);

    assert_eq!(report.step_count(), 2);
    assert!(report.step_by_step_section.starts_with("1. Line 2: `x = 1`"));
    assert!(report.step_by_step_section.contains("\n2. Line 5: `print(x)`"));
}

#[test]
fn test_comment_only_snippet_has_no_steps() {
    let report = analyze("# only a comment\n\n", SupportedLanguage::Python);
    assert_eq!(report.step_count(), 0);
    assert!(report.step_by_step_section.contains("no executable lines"));
    assert!(report.overview_text.contains("0 lines of code"));
}

#[test]
fn test_concepts_depend_only_on_language() {
    let first = analyze("x = 1", SupportedLanguage::Python);
    let second = analyze("def f():\n    return [i for i in range(3)]", SupportedLanguage::Python);
    let other = analyze("int x = 1;", SupportedLanguage::C);

    assert_eq!(first.concepts_section, second.concepts_section);
    assert_ne!(first.concepts_section, other.concepts_section);
    assert!(first.concepts_section.contains("indentation"));
    assert!(other.concepts_section.contains("memory management"));
}

#[test]
fn test_analysis_is_idempotent() {
    let code = "function add(a, b) {\n  return a + b;\n}";
    assert_eq!(
        analyze(code, SupportedLanguage::JavaScript),
        analyze(code, SupportedLanguage::JavaScript)
    );
}

#[test]
fn test_numeric_example_with_two_parameters() {
    let report = analyze(
        "function add(a, b) {\n  return a + b;\n}",
        SupportedLanguage::JavaScript,
    );
    assert!(report.example_section.contains("console.log(add(5, 3));"));
    assert!(report.example_section.contains("Expected output:\n\n```\n8\n```"));
}

#[test]
fn test_average_example_uses_sample_list() {
    let report = analyze(
        "def average(numbers):\n    return sum(numbers) / len(numbers)",
        SupportedLanguage::Python,
    );
    assert!(report.example_section.contains("print(average([5, 3, 2, 4]))"));
    assert!(report.example_section.contains("3.5"));
}

#[test]
fn test_react_component_example_renders_jsx() {
    let report = analyze(
        "function Greeting({ name }) {\n  return <h1>Hello, {name}!</h1>;\n}",
        SupportedLanguage::React,
    );
    assert!(report.example_section.contains("<Greeting />"));
    assert!(report.example_section.contains("```jsx"));
}

#[test]
fn test_c_main_only_runs_directly() {
    let code = "int main() {\n    printf(\"hi\\n\");\n    return 0;\n}";
    assert!(find_function(code, SupportedLanguage::C).is_none());
    let report = analyze(code, SupportedLanguage::C);
    assert!(report.example_section.starts_with("Run this code directly:"));
}

#[test]
fn test_unknown_function_gets_placeholder_call() {
    let report = analyze("def process(data):\n    return data", SupportedLanguage::Python);
    assert!(report.example_section.contains("print(process(...))"));
    assert!(report.example_section.contains("replacing any `...`"));
}

#[test]
fn test_find_function_reports_parameters() {
    let found = find_function("public int add(int a, int b) {", SupportedLanguage::Java)
        .expect("signature");
    assert_eq!(found.name, "add");
    assert_eq!(found.params, vec!["a", "b"]);
}

#[test]
fn test_overview_counts_roles() {
    let report = analyze(
        "import math\n\ndef area(r):\n    return math.pi * r ** 2",
        SupportedLanguage::Python,
    );
    assert_eq!(
        report.overview_text,
        "This Python code defines `area`, which performs a calculation and produces a numeric result. \
         It has 3 lines of code: 1 import, 1 function definition, 0 variable declarations and 1 control-flow statement."
    );
}

#[test]
fn test_purpose_detection() {
    assert_eq!(Purpose::detect(Some("sort_items"), ""), Purpose::Sorting);
    assert_eq!(Purpose::detect(Some("greetUser"), ""), Purpose::Greeting);
    assert_eq!(Purpose::detect(None, "x = 1\nprint(x)"), Purpose::General);
    assert_eq!(
        Purpose::detect(None, "data = fetch_json(url)"),
        Purpose::DataLoading
    );

    let report = analyze("x = 1\nprint(x)", SupportedLanguage::Python);
    assert!(report.overview_text.starts_with("This Python code performs a specific operation."));
}

#[test]
fn test_rendered_report_has_every_section_in_order() {
    let rendered = analyze("x = 1", SupportedLanguage::Python).render();
    assert!(rendered.starts_with("# Python Code Explanation\n"));
    let positions: Vec<usize> = rendered
        .match_indices("\n## ")
        .map(|(index, _)| index)
        .collect();
    assert_eq!(positions.len(), 5);
}

#[test]
fn test_analyzer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PatternAnalyzer>();
}

#[test]
fn test_every_code_line_gets_a_step_in_each_language() {
    let cases: [(SupportedLanguage, &str, &[usize]); 8] = [
        (
            SupportedLanguage::C,
            "// header\n#include <stdio.h>\n/* multi\n * line\n */\nint total = a\n    * b;\nint *p = &total;",
            &[2, 6, 7, 8],
        ),
        (
            SupportedLanguage::Cpp,
            "// note\n#include <iostream>\nint x = 1;\n/* a */\nint y = x\n    * 2;",
            &[2, 3, 5, 6],
        ),
        (
            SupportedLanguage::Java,
            "/**\n * Doc.\n */\npublic class Main {\n    // inner\n    int area = w\n        * h;\n}",
            &[4, 6, 7, 8],
        ),
        (
            SupportedLanguage::JavaScript,
            "// note\nconst a = 1;\n/* block */\nconst b = a\n  * 2;",
            &[2, 4, 5],
        ),
        (
            SupportedLanguage::React,
            "// note\nfunction App() {\n  return (\n    {/* jsx */}\n    <p>Hi</p>\n  );\n}",
            &[2, 3, 5, 6, 7],
        ),
        (
            SupportedLanguage::Python,
            "# note\nx = 2\ny = x * 3\n# end",
            &[2, 3],
        ),
        (
            SupportedLanguage::Html,
            "<!-- note -->\n<div>\n  <p>Hi</p>\n</div>",
            &[2, 3, 4],
        ),
        (
            SupportedLanguage::Css,
            "/* reset */\n* {\n  margin: 0;\n}\n/* multi\n   line */\nbody { color: red; }",
            &[2, 3, 4, 7],
        ),
    ];

    for (language, code, expected) in cases {
        let report = analyze(code, language);
        let numbers: Vec<usize> = report.lines.iter().map(|l| l.line_number).collect();
        assert_eq!(numbers, expected, "{language:?}");
        assert_eq!(report.step_count(), expected.len(), "{language:?}");
        assert!(report.lines.iter().all(|l| !l.explanation.is_empty()));
    }
}

#[test]
fn test_css_universal_selector_step() {
    let report = analyze("* {\n  margin: 0;\n}", SupportedLanguage::Css);
    assert!(
        report
            .step_by_step_section
            .starts_with("1. Line 1: `* {` → Starts a rule that applies to every element.")
    );
}

#[test]
fn test_step_with_backticks_uses_longer_fence() {
    let report = analyze("const msg = `Hi ${name}`;", SupportedLanguage::JavaScript);
    assert!(
        report
            .step_by_step_section
            .starts_with("1. Line 1: ``const msg = `Hi ${name}`;`` → ")
    );
}

fn any_language() -> impl Strategy<Value = SupportedLanguage> {
    prop::sample::select(SupportedLanguage::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_one_step_per_code_line(
        language in any_language(),
        lines in prop::collection::vec("[a-z0-9 =+*{};]{0,12}", 0..8),
    ) {
        let code = lines.join("\n");
        let expected: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, _)| index + 1)
            .collect();

        let report = analyze(&code, language);
        let numbers: Vec<usize> = report.lines.iter().map(|l| l.line_number).collect();
        prop_assert_eq!(&numbers, &expected);
        for step in 1..=expected.len() {
            let prefix = format!("{step}. Line ");
            prop_assert!(report.step_by_step_section.contains(&prefix));
        }
        for line in &report.lines {
            prop_assert!(!line.explanation.is_empty());
        }
    }
}
