//! Code Explanation Entity
//!
//! The successful response of the explanation service: the explanation text,
//! the echoed code, the canonical language name and the provenance tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::report::ExplanationReport;
use crate::value_objects::{ExplanationSource, SupportedLanguage};

/// Final explanation returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExplanation {
    /// Explanation text (Markdown)
    pub explanation: String,
    /// Code as submitted
    pub code: String,
    /// Canonical display name of the language
    pub language: String,
    /// Provenance tag
    pub source: ExplanationSource,
    /// When the explanation was produced
    pub timestamp: DateTime<Utc>,
}

impl CodeExplanation {
    /// Wrap text returned by a remote model
    pub fn from_remote(
        text: impl Into<String>,
        code: impl Into<String>,
        language: SupportedLanguage,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            explanation: text.into(),
            code: code.into(),
            language: language.display_name().to_string(),
            source: ExplanationSource::RemoteModel,
            timestamp,
        }
    }

    /// Render a locally synthesized report
    pub fn from_report(
        report: &ExplanationReport,
        code: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            explanation: report.render(),
            code: code.into(),
            language: report.language_label.clone(),
            source: report.source,
            timestamp,
        }
    }
}
