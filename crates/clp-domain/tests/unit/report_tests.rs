//! Unit tests for report entities

use chrono::{TimeZone, Utc};
use clp_domain::entities::line_record::inline_code;
use clp_domain::{
    CodeExplanation, ExplanationReport, ExplanationSource, LineRecord, RoleTag,
    SupportedLanguage,
};

fn sample_report() -> ExplanationReport {
    let lines = vec![
        LineRecord {
            line_number: 1,
            text: "x = 1".to_string(),
            role_tags: vec![RoleTag::VariableDecl],
            explanation: "Stores the number 1 in the variable `x`.".to_string(),
        },
        LineRecord {
            line_number: 3,
            text: "print(x)".to_string(),
            role_tags: vec![],
            explanation: "Displays `x` on the screen.".to_string(),
        },
    ];
    let step_by_step_section = lines
        .iter()
        .enumerate()
        .map(|(i, line)| line.render_step(i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    ExplanationReport {
        language: SupportedLanguage::Python,
        language_label: "Python".to_string(),
        overview_text: "This Python code performs a specific operation.".to_string(),
        constructs: vec![],
        constructs_section: "No specific constructs were detected.".to_string(),
        lines,
        step_by_step_section,
        concepts_section: "Python uses indentation.".to_string(),
        example_section: "Run this code directly:".to_string(),
        source: ExplanationSource::LocalPatternAnalysis,
    }
}

#[test]
fn test_line_record_render_step() {
    let report = sample_report();
    assert_eq!(
        report.lines[1].render_step(2),
        "2. Line 3: `print(x)` → Displays `x` on the screen."
    );
    assert!(report.lines[0].has_role(RoleTag::VariableDecl));
    assert!(!report.lines[1].has_role(RoleTag::Import));
}

#[test]
fn test_render_step_fences_backticks() {
    let record = LineRecord {
        line_number: 2,
        text: "const msg = `Hi ${name}`;".to_string(),
        role_tags: vec![RoleTag::VariableDecl],
        explanation: "Builds a greeting.".to_string(),
    };
    assert_eq!(
        record.render_step(1),
        "1. Line 2: ``const msg = `Hi ${name}`;`` → Builds a greeting."
    );
}

#[test]
fn test_inline_code_fences() {
    assert_eq!(inline_code("x = 1"), "`x = 1`");
    assert_eq!(inline_code("a ``b`` c"), "```a ``b`` c```");
    assert_eq!(inline_code("`tick`"), "`` `tick` ``");
}

#[test]
fn test_render_sections_in_fixed_order() {
    let rendered = sample_report().render();

    assert!(rendered.starts_with("# Python Code Explanation\n"));
    let headings = [
        "## What This Code Does",
        "## Detected Constructs",
        "## Step-by-Step Explanation",
        "## Key Concepts",
        "## Example Usage",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|h| rendered.find(h).expect("heading present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(rendered.contains("1. Line 1: `x = 1`"));
}

#[test]
fn test_step_count_matches_lines() {
    let report = sample_report();
    assert_eq!(report.step_count(), 2);
    assert_eq!(report.step_by_step_section.lines().count(), 2);
}

#[test]
fn test_code_explanation_from_report() {
    let report = sample_report();
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let explanation = CodeExplanation::from_report(&report, "x = 1\n\nprint(x)", at);

    assert_eq!(explanation.language, "Python");
    assert_eq!(explanation.source, ExplanationSource::LocalPatternAnalysis);
    assert_eq!(explanation.explanation, report.render());
    assert_eq!(explanation.timestamp, at);
}

#[test]
fn test_code_explanation_serializes_wire_shape() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let explanation =
        CodeExplanation::from_remote("An explanation", "int x;", SupportedLanguage::Cpp, at);
    let value = serde_json::to_value(&explanation).expect("serialize");

    assert_eq!(value["source"], "remote-model");
    assert_eq!(value["language"], "C++");
    assert_eq!(value["code"], "int x;");
    assert_eq!(value["timestamp"], "2024-05-01T12:00:00Z");
}
