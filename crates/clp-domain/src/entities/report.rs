//! Explanation Report Entity
//!
//! The structured result of explaining one snippet. Sections are kept as
//! separate text blocks so callers can inspect them; [`ExplanationReport::render`]
//! joins them into the Markdown document returned to users.

use serde::{Deserialize, Serialize};

use crate::constants::{
    HEADING_CONCEPTS, HEADING_CONSTRUCTS, HEADING_EXAMPLE, HEADING_OVERVIEW,
    HEADING_STEP_BY_STEP,
};
use crate::entities::line_record::LineRecord;
use crate::value_objects::{ConstructMatch, ExplanationSource, SupportedLanguage};

/// Multi-section explanation of a snippet
///
/// ## Business Rules
///
/// - `lines` holds exactly one record per non-blank, non-comment input line,
///   in source order
/// - `step_by_step_section` holds one entry per record, in the same order
/// - Sections always render in the order overview, constructs,
///   step-by-step, concepts, example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationReport {
    /// Validated language
    pub language: SupportedLanguage,
    /// Canonical display name of the language
    pub language_label: String,
    /// Short paragraph on the apparent purpose and structure
    pub overview_text: String,
    /// Constructs recognized in the snippet
    pub constructs: Vec<ConstructMatch>,
    /// Rendered constructs section
    pub constructs_section: String,
    /// Per-line records, in source order
    pub lines: Vec<LineRecord>,
    /// Rendered step-by-step section
    pub step_by_step_section: String,
    /// Language-specific concepts paragraph
    pub concepts_section: String,
    /// Example usage section
    pub example_section: String,
    /// Provenance tag
    pub source: ExplanationSource,
}

impl ExplanationReport {
    /// Number of entries in the step-by-step section
    pub fn step_count(&self) -> usize {
        self.lines.len()
    }

    /// Render the report as a Markdown document
    pub fn render(&self) -> String {
        let sections = [
            (HEADING_OVERVIEW, &self.overview_text),
            (HEADING_CONSTRUCTS, &self.constructs_section),
            (HEADING_STEP_BY_STEP, &self.step_by_step_section),
            (HEADING_CONCEPTS, &self.concepts_section),
            (HEADING_EXAMPLE, &self.example_section),
        ];

        let mut out = format!("# {} Code Explanation\n", self.language_label);
        for (heading, body) in sections {
            out.push_str("\n## ");
            out.push_str(heading);
            out.push('\n');
            out.push_str(body.trim_end());
            out.push('\n');
        }
        out
    }
}
