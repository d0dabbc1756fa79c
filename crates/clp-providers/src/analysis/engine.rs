//! Pattern Analyzer
//!
//! Local `CodeAnalyzer` implementation: recognize constructs, then
//! synthesize the report (which annotates every line).

use clp_application::domain_services::CodeAnalyzer;
use clp_domain::entities::ExplanationReport;
use clp_domain::error::Result;
use clp_domain::value_objects::SupportedLanguage;
use tracing::debug;

use crate::analysis::constructs::recognize;
use crate::analysis::report::synthesize;

/// Regex-driven code analyzer
///
/// Stateless; the rule tables it reads are process-wide statics, so one
/// instance can serve any number of concurrent requests.
///
/// # Example
///
/// ```rust
/// use clp_application::domain_services::CodeAnalyzer;
/// use clp_domain::SupportedLanguage;
/// use clp_providers::analysis::PatternAnalyzer;
///
/// let report = PatternAnalyzer::new()
///     .analyze("x = 1\nprint(x)", SupportedLanguage::Python)
///     .unwrap();
/// assert_eq!(report.step_count(), 2);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    /// Create a new pattern analyzer
    pub fn new() -> Self {
        Self
    }
}

impl CodeAnalyzer for PatternAnalyzer {
    fn analyze(&self, code: &str, language: SupportedLanguage) -> Result<ExplanationReport> {
        let constructs = recognize(code, language);
        let report = synthesize(code, language, constructs);
        debug!(
            language = %language,
            steps = report.step_count(),
            constructs = report.constructs.len(),
            "Local analysis finished"
        );
        Ok(report)
    }
}
