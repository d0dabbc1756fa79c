//! Construct Recognizer
//!
//! One detector table per language, compiled once on first use. Detectors
//! are independent: a snippet may fire any number of them, and each fires at
//! most once.

mod c;
mod cpp;
mod java;
mod javascript;
mod markup;
mod python;
mod react;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use clp_domain::value_objects::{ConstructMatch, SupportedLanguage};
use tracing::debug;

use crate::analysis::patterns::Detector;

/// Detector tables keyed by language, in catalogue order
pub static DETECTORS: LazyLock<HashMap<SupportedLanguage, Vec<Detector>>> = LazyLock::new(|| {
    SupportedLanguage::ALL
        .iter()
        .map(|&language| (language, detectors_for(language)))
        .collect()
});

fn detectors_for(language: SupportedLanguage) -> Vec<Detector> {
    match language {
        SupportedLanguage::Python => python::detectors(),
        SupportedLanguage::C => c::detectors(),
        SupportedLanguage::JavaScript => javascript::detectors(),
        SupportedLanguage::React => react::detectors(),
        SupportedLanguage::Html => markup::html_detectors(),
        SupportedLanguage::Css => markup::css_detectors(),
        SupportedLanguage::Java => java::detectors(),
        SupportedLanguage::Cpp => cpp::detectors(),
    }
}

/// Detector table for `language`; empty when none is defined
pub fn detectors(language: SupportedLanguage) -> &'static [Detector] {
    DETECTORS.get(&language).map_or(&[], Vec::as_slice)
}

/// Recognize every construct of `language` present in `code`
///
/// Matches come back in catalogue order, deduplicated by label.
pub fn recognize(code: &str, language: SupportedLanguage) -> Vec<ConstructMatch> {
    let mut seen = HashSet::new();
    let matches: Vec<ConstructMatch> = detectors(language)
        .iter()
        .filter(|detector| detector.fires(code))
        .filter(|detector| seen.insert(detector.label()))
        .map(Detector::to_match)
        .collect();

    debug!(
        language = %language,
        matched = matches.len(),
        labels = ?matches.iter().map(|m| m.label.as_str()).collect::<Vec<_>>(),
        "Constructs recognized"
    );
    matches
}
