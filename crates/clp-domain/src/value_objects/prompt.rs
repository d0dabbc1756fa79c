//! Prompt sent to a remote explanation model

use serde::{Deserialize, Serialize};

use crate::constants::TUTOR_SYSTEM_INSTRUCTION;
use crate::value_objects::language::SupportedLanguage;

/// Code and language to be explained by a remote model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationPrompt {
    /// Source snippet, as submitted
    pub code: String,
    /// Validated language
    pub language: SupportedLanguage,
}

impl ExplanationPrompt {
    /// Create a new prompt
    pub fn new(code: impl Into<String>, language: SupportedLanguage) -> Self {
        Self {
            code: code.into(),
            language,
        }
    }

    /// System instruction for chat-style models
    pub fn system_instruction(&self) -> &'static str {
        TUTOR_SYSTEM_INSTRUCTION
    }

    /// Render the tutoring prompt with the code fenced in its language tag
    pub fn render(&self) -> String {
        let name = self.language.display_name();
        format!(
            "You are a coding tutor. Your task is to explain the user's {name} code in a clear, \
             educational way that helps beginners understand programming concepts.\n\n\
             Original {name} code:\n\
             ```{fence}\n{code}\n```\n\n\
             Please provide a comprehensive explanation with the following structure:\n\n\
             ## What This Code Does\n\
             [Brief overview of the code's purpose and main functionality]\n\n\
             ## Step-by-Step Explanation\n\
             [Go through each line or section of code and explain what it does, why it's needed, and how it works]\n\n\
             ## Key Programming Concepts\n\
             [Explain the important programming concepts used in this code]\n\n\
             ## Example Walkthrough\n\
             [Show how the code would execute with sample data, step by step]\n\n\
             ## Learning Tips\n\
             [Provide helpful tips for understanding similar code patterns]\n\n\
             Make the explanation beginner-friendly, clear, and educational. Focus on helping \
             someone learn programming concepts, not just understand this specific code.",
            fence = self.language.fence_tag(),
            code = self.code,
        )
    }
}
