//! Detected-constructs section

use clp_domain::value_objects::ConstructMatch;

const NO_CONSTRUCTS: &str = "No specific constructs were recognized in this snippet, so read it as a sequence of instructions. Notice the order in which the statements run (sequential execution), how values move from one variable to the next (data flow), and where the code could be split into smaller reusable pieces (modularity).";

/// Bullet list of recognized constructs, or a reading guide when there are none
pub fn constructs_section(constructs: &[ConstructMatch]) -> String {
    if constructs.is_empty() {
        return NO_CONSTRUCTS.to_string();
    }
    constructs
        .iter()
        .map(|c| {
            format!(
                "- **{}** ({}): {} Example: `{}`",
                c.label,
                c.category.as_str(),
                c.explanation,
                c.example
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
