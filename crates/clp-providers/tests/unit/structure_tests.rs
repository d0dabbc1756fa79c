//! Tests for per-line role classification and line extraction

use clp_domain::value_objects::{RoleTag, SupportedLanguage};
use clp_providers::analysis::{CommentScanner, classify_line, is_comment_line, source_lines};

#[test]
fn test_import_lines() {
    assert_eq!(classify_line("#include <stdio.h>"), vec![RoleTag::Import]);
    assert_eq!(classify_line("import os"), vec![RoleTag::Import]);
    assert_eq!(classify_line("from math import sqrt"), vec![RoleTag::Import]);
    assert_eq!(
        classify_line("const fs = require('fs');"),
        vec![RoleTag::Import, RoleTag::VariableDecl]
    );
}

#[test]
fn test_function_definitions() {
    assert_eq!(classify_line("def greet(name):"), vec![RoleTag::FunctionDef]);
    assert_eq!(classify_line("int main() {"), vec![RoleTag::FunctionDef]);
    assert_eq!(
        classify_line("function add(a, b) {"),
        vec![RoleTag::FunctionDef]
    );
    assert_eq!(
        classify_line("const add = (a, b) => a + b;"),
        vec![RoleTag::FunctionDef]
    );
    assert_eq!(classify_line("class Dog:"), vec![RoleTag::FunctionDef]);
}

#[test]
fn test_variable_declarations() {
    assert_eq!(classify_line("int x = 5;"), vec![RoleTag::VariableDecl]);
    assert_eq!(classify_line("let total = 0;"), vec![RoleTag::VariableDecl]);
    assert_eq!(classify_line("x = 10"), vec![RoleTag::VariableDecl]);
}

#[test]
fn test_control_flow() {
    assert_eq!(classify_line("if x > 5:"), vec![RoleTag::ControlFlow]);
    assert_eq!(classify_line("} else {"), vec![RoleTag::ControlFlow]);
    assert_eq!(classify_line("else if (x) {"), vec![RoleTag::ControlFlow]);
    assert_eq!(classify_line("return x;"), vec![RoleTag::ControlFlow]);
    assert_eq!(
        classify_line("for (int i=0;i<10;i++) { printf(\"%d\",i); }"),
        vec![RoleTag::ControlFlow]
    );
}

#[test]
fn test_plain_call_has_no_role() {
    assert!(classify_line("print(x)").is_empty());
    assert!(classify_line("}").is_empty());
}

#[test]
fn test_comment_markers_per_language() {
    assert!(is_comment_line("# note", SupportedLanguage::Python));
    assert!(!is_comment_line("#include <stdio.h>", SupportedLanguage::C));
    assert!(is_comment_line("// note", SupportedLanguage::Java));
    assert!(!is_comment_line("* b;", SupportedLanguage::C));
    assert!(!is_comment_line("*ptr = 5;", SupportedLanguage::C));
    assert!(!is_comment_line("* {", SupportedLanguage::Css));
    assert!(!is_comment_line("/* why */ int x = 1;", SupportedLanguage::C));
    assert!(is_comment_line("/* block */", SupportedLanguage::Css));
    assert!(is_comment_line("<!-- note -->", SupportedLanguage::Html));
    assert!(is_comment_line("{/* note */}", SupportedLanguage::React));
    assert!(!is_comment_line("// not a comment in python", SupportedLanguage::Python));
}

#[test]
fn test_source_lines_skip_blank_and_comment_lines() {
    let code = "\n# comment\nx = 1\n\nprint(x)\n";
    let lines = source_lines(code, SupportedLanguage::Python);

    let numbers: Vec<usize> = lines.iter().map(|l| l.line_number).collect();
    assert_eq!(numbers, vec![3, 5]);
    assert_eq!(lines[0].text, "x = 1");
    assert!(lines.iter().all(|l| l.explanation.is_empty()));
}

#[test]
fn test_source_lines_are_trimmed() {
    let lines = source_lines("def f():\n    return 1", SupportedLanguage::Python);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].text, "return 1");
    assert_eq!(lines[1].line_number, 2);
    assert!(lines[1].has_role(RoleTag::ControlFlow));
}

fn numbers(code: &str, language: SupportedLanguage) -> Vec<usize> {
    source_lines(code, language)
        .iter()
        .map(|l| l.line_number)
        .collect()
}

#[test]
fn test_css_universal_selector_is_code() {
    assert_eq!(
        numbers("* {\n  margin: 0;\n}", SupportedLanguage::Css),
        vec![1, 2, 3]
    );
}

#[test]
fn test_continuation_starting_with_star_is_code() {
    assert_eq!(
        numbers("int total = a\n    * b;", SupportedLanguage::C),
        vec![1, 2]
    );
    assert_eq!(
        numbers("const area = width\n  * height;", SupportedLanguage::JavaScript),
        vec![1, 2]
    );
}

#[test]
fn test_multi_line_block_comment_is_skipped() {
    let code = "/**\n * Adds two numbers.\n *\n */\nint add(int a, int b) {\n    return a\n        * b;\n}";
    assert_eq!(numbers(code, SupportedLanguage::C), vec![5, 6, 7, 8]);

    let css = "/* reset\n   everything */\n* {\n  margin: 0;\n}";
    assert_eq!(numbers(css, SupportedLanguage::Css), vec![3, 4, 5]);

    let html = "<!--\n  header\n-->\n<h1>Hi</h1>";
    assert_eq!(numbers(html, SupportedLanguage::Html), vec![4]);

    let jsx = "{/*\n  note\n*/}\n<p>Hi</p>";
    assert_eq!(numbers(jsx, SupportedLanguage::React), vec![4]);
}

#[test]
fn test_code_after_block_comment_close_is_kept() {
    let code = "/* start\n end */ int x = 1;";
    assert_eq!(numbers(code, SupportedLanguage::C), vec![2]);
}

#[test]
fn test_scanner_ignores_opener_inside_line_comment() {
    let mut scanner = CommentScanner::new(SupportedLanguage::Java);
    assert!(scanner.is_comment("// see /* here"));
    assert!(!scanner.is_comment("* b;"));
}
