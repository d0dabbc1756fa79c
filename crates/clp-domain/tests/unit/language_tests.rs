//! Unit tests for language allow-list validation

use clp_domain::constants::{MESSAGE_LANGUAGE_REQUIRED, MESSAGE_UNSUPPORTED_LANGUAGE};
use clp_domain::{LanguageRejection, SupportedLanguage};
use proptest::prelude::*;

#[test]
fn test_validate_exact_tokens() {
    let cases = [
        ("c", SupportedLanguage::C),
        ("python", SupportedLanguage::Python),
        ("javascript", SupportedLanguage::JavaScript),
        ("react", SupportedLanguage::React),
        ("html", SupportedLanguage::Html),
        ("css", SupportedLanguage::Css),
        ("java", SupportedLanguage::Java),
        ("cpp", SupportedLanguage::Cpp),
        ("c++", SupportedLanguage::Cpp),
    ];

    for (raw, expected) in cases {
        assert_eq!(SupportedLanguage::validate(Some(raw)), Ok(expected), "{raw}");
    }
}

#[test]
fn test_validate_ignores_case_and_whitespace() {
    assert_eq!(
        SupportedLanguage::validate(Some("  PyThOn\t")),
        Ok(SupportedLanguage::Python)
    );
    assert_eq!(
        SupportedLanguage::validate(Some("C++ ")),
        Ok(SupportedLanguage::Cpp)
    );
}

#[test]
fn test_validate_accepts_space_suffix() {
    assert_eq!(
        SupportedLanguage::validate(Some("python 3")),
        Ok(SupportedLanguage::Python)
    );
    assert_eq!(
        SupportedLanguage::validate(Some("javascript es6")),
        Ok(SupportedLanguage::JavaScript)
    );
}

#[test]
fn test_validate_normalizes_version_suffix() {
    assert_eq!(
        SupportedLanguage::validate(Some("python3")),
        Ok(SupportedLanguage::Python)
    );
    assert_eq!(
        SupportedLanguage::validate(Some("HTML5")),
        Ok(SupportedLanguage::Html)
    );
    assert_eq!(
        SupportedLanguage::validate(Some("c++17")),
        Ok(SupportedLanguage::Cpp)
    );
    assert_eq!(
        SupportedLanguage::validate(Some("c99")),
        Ok(SupportedLanguage::C)
    );
}

#[test]
fn test_validate_does_not_confuse_java_and_javascript() {
    assert_eq!(
        SupportedLanguage::validate(Some("java")),
        Ok(SupportedLanguage::Java)
    );
    assert_eq!(
        SupportedLanguage::validate(Some("javascript")),
        Ok(SupportedLanguage::JavaScript)
    );
    assert!(SupportedLanguage::validate(Some("javas")).is_err());
}

#[test]
fn test_validate_rejects_unknown_language() {
    let rejection = SupportedLanguage::validate(Some("ruby")).unwrap_err();

    assert_eq!(rejection.message, MESSAGE_UNSUPPORTED_LANGUAGE);
    assert_eq!(
        rejection.supported_languages,
        vec!["C", "Python", "JavaScript", "React", "HTML", "CSS", "Java", "C++"]
    );
}

#[test]
fn test_validate_rejects_prefix_without_space() {
    assert!(SupportedLanguage::validate(Some("pythonic")).is_err());
    assert!(SupportedLanguage::validate(Some("csharp")).is_err());
    assert!(SupportedLanguage::validate(Some("c#")).is_err());
}

#[test]
fn test_validate_missing_language() {
    assert_eq!(
        SupportedLanguage::validate(None),
        Err(LanguageRejection::missing())
    );
    let rejection = SupportedLanguage::validate(Some("   ")).unwrap_err();
    assert_eq!(rejection.message, MESSAGE_LANGUAGE_REQUIRED);
    assert_eq!(rejection.supported_languages.len(), 8);
}

#[test]
fn test_display_names_and_fence_tags() {
    assert_eq!(SupportedLanguage::Python.to_string(), "Python");
    assert_eq!(SupportedLanguage::Cpp.display_name(), "C++");
    assert_eq!(SupportedLanguage::Html.display_name(), "HTML");
    assert_eq!(SupportedLanguage::React.fence_tag(), "jsx");
    assert_eq!(SupportedLanguage::Cpp.fence_tag(), "cpp");
}

#[test]
fn test_serde_uses_lowercase_ids() {
    let json = serde_json::to_string(&SupportedLanguage::JavaScript).expect("serialize");
    assert_eq!(json, "\"javascript\"");
    let parsed: SupportedLanguage = serde_json::from_str("\"cpp\"").expect("deserialize");
    assert_eq!(parsed, SupportedLanguage::Cpp);
}

#[test]
fn test_every_language_has_categories() {
    for lang in SupportedLanguage::ALL {
        assert!(!lang.construct_categories().is_empty(), "{lang}");
    }
}

proptest! {
    #[test]
    fn prop_allow_listed_tokens_validate_in_any_casing(
        index in 0usize..8,
        upper_mask in proptest::collection::vec(any::<bool>(), 16),
        leading in "[ \t]{0,3}",
        trailing in "[ \t]{0,3}",
    ) {
        let lang = SupportedLanguage::ALL[index];
        for token in lang.tokens() {
            let cased: String = token
                .chars()
                .zip(upper_mask.iter().cycle())
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
                .collect();
            let raw = format!("{leading}{cased}{trailing}");
            prop_assert_eq!(SupportedLanguage::validate(Some(&raw)), Ok(lang));
        }
    }

    #[test]
    fn prop_non_allow_listed_words_are_rejected(word in "[a-z]{1,12}") {
        let is_token = SupportedLanguage::ALL
            .iter()
            .any(|lang| lang.tokens().contains(&word.as_str()));
        prop_assume!(!is_token);

        let rejected = SupportedLanguage::validate(Some(&word));
        prop_assert!(rejected.is_err());
        prop_assert_eq!(rejected.unwrap_err().supported_languages.len(), 8);
    }
}
