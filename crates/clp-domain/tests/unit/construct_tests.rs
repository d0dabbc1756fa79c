//! Unit tests for construct value objects

use clp_domain::{ConstructCategory, ConstructMatch, ExplanationSource, RoleTag};

#[test]
fn test_construct_match_new() {
    let m = ConstructMatch::new(
        ConstructCategory::StringFormat,
        "f-string",
        "Embeds expressions inside a string literal.",
        "f\"Hello, {name}!\"",
    );

    assert_eq!(m.category, ConstructCategory::StringFormat);
    assert_eq!(m.label, "f-string");
    assert!(m.example.contains("{name}"));
}

#[test]
fn test_category_wire_names_match_serde() {
    let categories = [
        ConstructCategory::Function,
        ConstructCategory::DataStructure,
        ConstructCategory::AsyncPattern,
        ConstructCategory::ErrorHandling,
        ConstructCategory::Jsx,
    ];
    for category in categories {
        let json = serde_json::to_string(&category).expect("serialize");
        assert_eq!(json, format!("\"{}\"", category.as_str()));
    }
}

#[test]
fn test_role_tag_serialization() {
    let json = serde_json::to_string(&[RoleTag::FunctionDef, RoleTag::VariableDecl])
        .expect("serialize");
    assert_eq!(json, r#"["functionDef","variableDecl"]"#);
}

#[test]
fn test_explanation_source_tags() {
    assert_eq!(ExplanationSource::RemoteModel.as_str(), "remote-model");
    assert_eq!(
        serde_json::to_string(&ExplanationSource::LocalPatternAnalysis).expect("serialize"),
        "\"local-pattern-analysis\""
    );
    assert_eq!(
        ExplanationSource::LocalPatternAnalysis.to_string(),
        "local-pattern-analysis"
    );
}
