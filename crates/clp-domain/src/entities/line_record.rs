//! Per-line analysis record

use serde::{Deserialize, Serialize};

use crate::value_objects::RoleTag;

/// One non-blank, non-comment source line with its explanation
///
/// Records are built fresh for every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    /// 1-based position in the original snippet
    pub line_number: usize,
    /// Trimmed line content
    pub text: String,
    /// Structural roles assigned by the line classifier
    pub role_tags: Vec<RoleTag>,
    /// One-sentence explanation from the line annotator
    pub explanation: String,
}

impl LineRecord {
    /// Whether the classifier assigned `tag` to this line
    pub fn has_role(&self, tag: RoleTag) -> bool {
        self.role_tags.contains(&tag)
    }

    /// Render this record as step `step` of the step-by-step section
    pub fn render_step(&self, step: usize) -> String {
        format!(
            "{step}. Line {}: {} → {}",
            self.line_number,
            inline_code(&self.text),
            self.explanation
        )
    }
}

/// Markdown code span for `text`
///
/// The fence is one backtick longer than the longest backtick run inside
/// `text`, padded with spaces when `text` starts or ends with a backtick.
pub fn inline_code(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}
