//! Code Analyzer Domain Port
//!
//! Defines the business contract for explaining code without a remote model.
//! Implementations recognize constructs, annotate each line and synthesize a
//! multi-section report.

use clp_domain::entities::ExplanationReport;
use clp_domain::error::Result;
use clp_domain::value_objects::SupportedLanguage;

/// Domain Port for Local Code Analysis
///
/// # Contract
///
/// - Deterministic: identical input yields an identical report
/// - The report holds one line record per non-blank, non-comment line, in
///   source order
/// - Any error indicates a defect in the analyzer, never bad user input
///
/// # Example
///
/// ```ignore
/// use clp_application::domain_services::CodeAnalyzer;
/// use clp_domain::SupportedLanguage;
///
/// let report = analyzer.analyze("x = 1", SupportedLanguage::Python)?;
/// println!("{}", report.render());
/// ```
pub trait CodeAnalyzer: Send + Sync {
    /// Produce a local explanation report for `code`
    fn analyze(&self, code: &str, language: SupportedLanguage) -> Result<ExplanationReport>;
}
