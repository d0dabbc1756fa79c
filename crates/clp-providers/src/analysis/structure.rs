//! Per-line role classification
//!
//! Tags each source line as an import, a function definition, a variable
//! declaration, or a control-flow statement. Tags are not exclusive, except
//! that a function definition is never also counted as a declaration.

use std::sync::LazyLock;

use clp_domain::entities::LineRecord;
use clp_domain::value_objects::{RoleTag, SupportedLanguage};
use regex::Regex;

use crate::analysis::patterns::compile;

struct RolePatterns {
    import: Option<Regex>,
    function_def: Option<Regex>,
    signature: Option<Regex>,
    variable_decl: Option<Regex>,
    control_flow: Option<Regex>,
}

static ROLE_PATTERNS: LazyLock<RolePatterns> = LazyLock::new(|| RolePatterns {
    import: compile(
        "role-import",
        r#"^(?:#\s*include\b|import\s|from\s+[\w.]+\s+import\b|using\s+namespace\b|@import\b|<script\b[^>]*\bsrc\s*=|<link\b)|\brequire\s*\(\s*['"]"#,
    ),
    function_def: compile(
        "role-function",
        r"^(?:export\s+(?:default\s+)?)?(?:async\s+)?(?:def\s+\w+|function\b\s*\*?\s*\w*\s*\(|class\s+\w+)|^(?:export\s+)?(?:const|let|var)\s+\w+\s*=\s*(?:async\s+)?(?:\([^()]*\)|\w+)\s*=>",
    ),
    signature: compile(
        "role-signature",
        r"^(?:(?:public|private|protected|static|final|inline|virtual|const|unsigned|extern|abstract|synchronized)\s+)*([A-Za-z_][\w:<>,]*)[\s*&]+([A-Za-z_][\w:]*)\s*\([^;]*\)\s*(?:const\s*)?(?:throws\s+[\w, ]+)?\s*\{?\s*$",
    ),
    variable_decl: compile(
        "role-variable",
        r"^(?:(?:const|static|final|unsigned|signed|export)\s+)*(?:int|char|float|double|long|short|bool|boolean|string|String|auto|var|let|const|size_t|std::\w+)\b[\s*&]*[A-Za-z_\[{]|^[A-Za-z_][\w.]*(?:\s*,\s*[A-Za-z_]\w*)*\s*(?:[-+*/%]|//|\*\*)?=[^=]",
    ),
    control_flow: compile(
        "role-control",
        r"^(?:\}\s*)?(?:if|else|elif|for|while|switch|case|return|break|continue|try|catch|except|finally|do)\b",
    ),
});

/// Leading words that look like a return type but start a statement
const STATEMENT_KEYWORDS: &[&str] = &[
    "return", "else", "new", "delete", "throw", "case", "await", "yield", "print", "if", "while",
    "for", "switch", "elif",
];

fn matches(pattern: Option<&Regex>, text: &str) -> bool {
    pattern.is_some_and(|re| re.is_match(text))
}

fn is_signature(text: &str) -> bool {
    let Some(re) = ROLE_PATTERNS.signature.as_ref() else {
        return false;
    };
    re.captures(text).is_some_and(|caps| {
        let head = caps.get(1).map_or("", |m| m.as_str());
        !STATEMENT_KEYWORDS.contains(&head)
    })
}

/// Role tags for one trimmed source line
pub fn classify_line(text: &str) -> Vec<RoleTag> {
    let text = text.trim();
    let patterns = &*ROLE_PATTERNS;
    let mut tags = Vec::new();

    if matches(patterns.import.as_ref(), text) {
        tags.push(RoleTag::Import);
    }
    let is_function = matches(patterns.function_def.as_ref(), text) || is_signature(text);
    if is_function {
        tags.push(RoleTag::FunctionDef);
    } else if matches(patterns.variable_decl.as_ref(), text) {
        tags.push(RoleTag::VariableDecl);
    }
    if matches(patterns.control_flow.as_ref(), text) {
        tags.push(RoleTag::ControlFlow);
    }
    tags
}

/// Block comment delimiters for `language`
fn block_delimiters(language: SupportedLanguage) -> Option<(&'static str, &'static str)> {
    match language {
        SupportedLanguage::Python => None,
        SupportedLanguage::Html => Some(("<!--", "-->")),
        SupportedLanguage::C
        | SupportedLanguage::Cpp
        | SupportedLanguage::Java
        | SupportedLanguage::JavaScript
        | SupportedLanguage::React
        | SupportedLanguage::Css => Some(("/*", "*/")),
    }
}

/// Whether nothing but a JSX brace follows a comment closer
fn only_closer_remains(rest: &str, language: SupportedLanguage) -> bool {
    let rest = rest.trim();
    rest.is_empty() || (language == SupportedLanguage::React && rest == "}")
}

/// Text after the block comment opener that starts `text`
fn block_body(text: &str, language: SupportedLanguage) -> Option<&str> {
    let (open, _) = block_delimiters(language)?;
    text.strip_prefix(open).or_else(|| {
        text.strip_prefix("{/*")
            .filter(|_| language == SupportedLanguage::React)
    })
}

/// Whether `text` opens a block comment and holds no code after it
fn is_block_comment(text: &str, language: SupportedLanguage) -> bool {
    let Some((_, close)) = block_delimiters(language) else {
        return false;
    };
    block_body(text, language).is_some_and(|body| {
        body.find(close)
            .is_none_or(|end| only_closer_remains(&body[end + close.len()..], language))
    })
}

/// Whether `text` is a full-line comment in `language`
///
/// Looks at the line alone. Continuation lines of a multi-line block
/// comment are only recognized by [`CommentScanner`].
pub fn is_comment_line(text: &str, language: SupportedLanguage) -> bool {
    let text = text.trim();
    match language {
        SupportedLanguage::Python => text.starts_with('#'),
        SupportedLanguage::C
        | SupportedLanguage::Cpp
        | SupportedLanguage::Java
        | SupportedLanguage::JavaScript
        | SupportedLanguage::React => text.starts_with("//") || is_block_comment(text, language),
        SupportedLanguage::Css | SupportedLanguage::Html => is_block_comment(text, language),
    }
}

/// Line-by-line comment detection that remembers open block comments
#[derive(Debug, Clone, Copy)]
pub struct CommentScanner {
    language: SupportedLanguage,
    in_block: bool,
}

impl CommentScanner {
    /// Scanner positioned before the first line of a snippet
    pub fn new(language: SupportedLanguage) -> Self {
        Self {
            language,
            in_block: false,
        }
    }

    /// Whether the next line is entirely comment
    pub fn is_comment(&mut self, text: &str) -> bool {
        let text = text.trim();
        let Some((_, close)) = block_delimiters(self.language) else {
            return is_comment_line(text, self.language);
        };

        if self.in_block {
            return match text.find(close) {
                Some(end) => {
                    self.in_block = false;
                    only_closer_remains(&text[end + close.len()..], self.language)
                }
                None => true,
            };
        }

        if !is_comment_line(text, self.language) {
            return false;
        }
        if let Some(body) = block_body(text, self.language) {
            self.in_block = !body.contains(close);
        }
        true
    }
}

/// Line records for every non-blank, non-comment line of `code`
///
/// Explanations are left empty for the annotator to fill in. Line numbers
/// are 1-based positions in the original snippet.
pub fn source_lines(code: &str, language: SupportedLanguage) -> Vec<LineRecord> {
    let mut comments = CommentScanner::new(language);
    code.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let text = raw.trim();
            if text.is_empty() || comments.is_comment(text) {
                return None;
            }
            Some(LineRecord {
                line_number: index + 1,
                text: text.to_string(),
                role_tags: classify_line(text),
                explanation: String::new(),
            })
        })
        .collect()
}
