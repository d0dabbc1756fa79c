//! Report Synthesizer
//!
//! Builds the five report sections from the recognized constructs and the
//! annotated source lines.

mod concepts;
mod constructs;
mod example;
mod overview;

use clp_domain::entities::ExplanationReport;
use clp_domain::value_objects::{ConstructMatch, ExplanationSource, SupportedLanguage};

use crate::analysis::lines::explain_line;
use crate::analysis::structure::source_lines;

pub use concepts::concepts;
pub use constructs::constructs_section;
pub use example::{FunctionSignature, example_section, find_function};
pub use overview::{Purpose, overview};

const NO_LINES: &str = "There are no executable lines to walk through: the snippet only contains blank lines or comments.";

/// Assemble the full local report for `code`
pub fn synthesize(
    code: &str,
    language: SupportedLanguage,
    constructs: Vec<ConstructMatch>,
) -> ExplanationReport {
    let mut lines = source_lines(code, language);
    for line in &mut lines {
        line.explanation = explain_line(&line.text, language);
    }

    let function = find_function(code, language);
    let function_name = function.as_ref().map(|f| f.name.as_str());
    let purpose = Purpose::detect(function_name, code);

    let step_by_step_section = if lines.is_empty() {
        NO_LINES.to_string()
    } else {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| line.render_step(index + 1))
            .collect::<Vec<_>>()
            .join("\n")
    };

    ExplanationReport {
        language,
        language_label: language.display_name().to_string(),
        overview_text: overview(language, function_name, purpose, &lines),
        constructs_section: constructs_section(&constructs),
        constructs,
        step_by_step_section,
        concepts_section: concepts(language).to_string(),
        example_section: example_section(code, language, function.as_ref()),
        lines,
        source: ExplanationSource::LocalPatternAnalysis,
    }
}
