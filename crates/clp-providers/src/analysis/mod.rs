//! Local pattern-analysis engine
//!
//! | Stage | Module |
//! |-------|--------|
//! | Construct Recognizer | [`constructs`] |
//! | Line role classifier | [`structure`] |
//! | Line Annotator | [`lines`] |
//! | Report Synthesizer | [`report`] |
//!
//! All rule tables are compiled once and shared read-only across requests.

pub mod constructs;
pub mod engine;
pub mod lines;
pub mod patterns;
pub mod report;
pub mod structure;

pub use constructs::recognize;
pub use engine::PatternAnalyzer;
pub use lines::explain_line;
pub use report::synthesize;
pub use structure::{CommentScanner, classify_line, is_comment_line, source_lines};
