//! Tests for the construct recognizer

use std::collections::HashSet;

use clp_domain::value_objects::{ConstructCategory, SupportedLanguage};
use clp_providers::analysis::constructs::detectors;
use clp_providers::analysis::recognize;

fn labels(code: &str, language: SupportedLanguage) -> Vec<String> {
    recognize(code, language)
        .into_iter()
        .map(|m| m.label)
        .collect()
}

#[test]
fn test_every_language_has_detectors() {
    for language in SupportedLanguage::ALL {
        assert!(
            !detectors(language).is_empty(),
            "{language} should have a detector table"
        );
    }
}

#[test]
fn test_detector_categories_are_legal_for_their_language() {
    for language in SupportedLanguage::ALL {
        let legal = language.construct_categories();
        for detector in detectors(language) {
            assert!(
                legal.contains(&detector.category()),
                "{} uses {:?}, which is not legal for {language}",
                detector.label(),
                detector.category()
            );
        }
    }
}

#[test]
fn test_detector_labels_are_unique_per_language() {
    for language in SupportedLanguage::ALL {
        let mut seen = HashSet::new();
        for detector in detectors(language) {
            assert!(
                seen.insert(detector.label()),
                "duplicate label {} for {language}",
                detector.label()
            );
        }
    }
}

#[test]
fn test_python_greeting_detects_function_and_fstring() {
    let found = labels(
        "def greet(name): return f'Hello, {name}!'",
        SupportedLanguage::Python,
    );
    assert_eq!(found, vec!["Function Definition", "F-String Formatting"]);
}

#[test]
fn test_c_loop_has_no_pointer_or_function_match() {
    let matches = recognize(
        "for (int i=0;i<10;i++) { printf(\"%d\",i); }",
        SupportedLanguage::C,
    );
    let found: Vec<&str> = matches.iter().map(|m| m.label.as_str()).collect();

    assert!(found.contains(&"For Loop"));
    assert!(found.contains(&"Formatted Output"));
    assert!(!found.contains(&"Function Definition"));
    assert!(
        matches
            .iter()
            .all(|m| m.category != ConstructCategory::Pointer
                && m.category != ConstructCategory::Memory)
    );
}

#[test]
fn test_detectors_fire_independently() {
    let found = labels("for item in items:\n    print(item)", SupportedLanguage::Python);
    assert!(found.contains(&"For Loop".to_string()));
    assert!(found.contains(&"Print Output".to_string()));
}

#[test]
fn test_plain_assignment_matches_nothing() {
    assert!(recognize("x = 1", SupportedLanguage::Python).is_empty());
}

#[test]
fn test_c_pointer_and_memory() {
    let found = labels(
        "int *data = malloc(4 * sizeof(int));\nfree(data);",
        SupportedLanguage::C,
    );
    assert!(found.contains(&"Pointer Usage".to_string()));
    assert!(found.contains(&"Dynamic Memory".to_string()));
}

#[test]
fn test_javascript_arrow_and_template_literal() {
    let found = labels(
        "const greet = (name) => `Hi ${name}`;",
        SupportedLanguage::JavaScript,
    );
    assert!(found.contains(&"Arrow Function".to_string()));
    assert!(found.contains(&"Template Literal".to_string()));
    assert!(found.contains(&"Block-Scoped Declaration".to_string()));
}

#[test]
fn test_react_state_hook() {
    let matches = recognize(
        "const [count, setCount] = useState(0);",
        SupportedLanguage::React,
    );
    let found: Vec<&str> = matches.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(found, vec!["React Hooks", "State Hook"]);
    assert!(matches.iter().all(|m| m.category == ConstructCategory::Hook));
}

#[test]
fn test_react_component_with_event_and_list() {
    let code = "import React from 'react';\n\
                function TodoList({ items, onSelect }) {\n\
                  return <ul>{items.map((item) => <li onClick={onSelect}>{item}</li>)}</ul>;\n\
                }";
    let found = labels(code, SupportedLanguage::React);
    for expected in [
        "JSX Element",
        "Props Destructuring",
        "Component Definition",
        "Event Handler",
        "List Rendering",
        "React Import",
    ] {
        assert!(
            found.contains(&expected.to_string()),
            "missing {expected} in {found:?}"
        );
    }
}

#[test]
fn test_html_document_structure() {
    let found = labels(
        "<!DOCTYPE html>\n<nav><a href=\"/\">Home</a></nav>",
        SupportedLanguage::Html,
    );
    assert_eq!(found, vec!["Document Type", "Semantic Section", "Hyperlink"]);
}

#[test]
fn test_css_media_query_and_layout() {
    let found = labels(
        "@media (max-width: 600px) {\n  .card { display: flex; }\n}",
        SupportedLanguage::Css,
    );
    assert!(found.contains(&"Media Query".to_string()));
    assert!(found.contains(&"Class Selector".to_string()));
    assert!(found.contains(&"Flexbox/Grid Layout".to_string()));
}

#[test]
fn test_java_main_program() {
    let code = "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hi\");\n    }\n}";
    let found = labels(code, SupportedLanguage::Java);
    assert_eq!(found, vec!["Class Definition", "Main Method", "Console Output"]);
}

#[test]
fn test_cpp_stream_output_and_namespace() {
    let found = labels(
        "#include <iostream>\nint main() { std::cout << \"Hi\"; }",
        SupportedLanguage::Cpp,
    );
    assert!(found.contains(&"Stream Output".to_string()));
    assert!(found.contains(&"Standard Namespace".to_string()));
}

#[test]
fn test_matches_follow_catalogue_order() {
    let code = "print(x)\nclass A: pass\ndef f(): pass";
    let found = labels(code, SupportedLanguage::Python);
    assert_eq!(
        found,
        vec!["Function Definition", "Class Definition", "Print Output"]
    );
}
