//! Shape-based fallback for lines no rule recognizes

const COMMENT_MARKERS: &[&str] = &["//", "#", "/*", "*", "<!--", "--"];

/// Explain `line` by its superficial shape alone
pub fn describe_shape(line: &str) -> String {
    let line = line.trim();
    let sentence = if line.is_empty() {
        "A blank formatting line that separates parts of the code for readability."
    } else if COMMENT_MARKERS.iter().any(|m| line.starts_with(m)) {
        "A comment that explains the code to human readers. It is ignored when the program runs."
    } else if line.contains('=') && !line.contains("==") && !line.contains("!=") {
        "Assignment: stores a value in a variable."
    } else if has_balanced_call(line) {
        "Calls a function or method to perform an action."
    } else if line.contains('{') || line.contains('}') {
        "Marks the start or end of a block of code."
    } else {
        "Executes a programming instruction."
    };
    sentence.to_string()
}

fn has_balanced_call(line: &str) -> bool {
    let opens = line.matches('(').count();
    opens > 0 && opens == line.matches(')').count()
}
