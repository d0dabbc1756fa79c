//! Provenance tag for explanations

use serde::{Deserialize, Serialize};

/// Where an explanation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExplanationSource {
    /// Text produced by a hosted language model
    RemoteModel,
    /// Text produced by the local heuristic engine
    LocalPatternAnalysis,
}

impl ExplanationSource {
    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RemoteModel => "remote-model",
            Self::LocalPatternAnalysis => "local-pattern-analysis",
        }
    }
}

impl std::fmt::Display for ExplanationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
