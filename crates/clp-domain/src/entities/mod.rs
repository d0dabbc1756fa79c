//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`LineRecord`] | One analysed source line |
//! | [`ExplanationReport`] | Multi-section local explanation |
//! | [`CodeExplanation`] | Final response with provenance and timestamp |

/// Code explanation response entity
pub mod explanation;
/// Per-line record entity
pub mod line_record;
/// Explanation report entity
pub mod report;

pub use explanation::CodeExplanation;
pub use line_record::LineRecord;
pub use report::ExplanationReport;
