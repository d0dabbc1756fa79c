use clp_domain::value_objects::ConstructCategory as Cat;

use crate::analysis::patterns::Detector;

pub(super) fn html_detectors() -> Vec<Detector> {
    [
        Detector::new(
            Cat::Markup,
            "Document Type",
            r"(?i)<!doctype\s+html",
            "Tells the browser to render the page in standards mode using HTML5 rules.",
            "<!DOCTYPE html>",
        ),
        Detector::new(
            Cat::Markup,
            "Semantic Section",
            r"(?i)<(?:header|nav|main|section|article|aside|footer)\b",
            "Semantic tags describe the role of each region of the page, which helps screen readers and search engines.",
            "<nav><a href=\"/\">Home</a></nav>",
        ),
        Detector::new(
            Cat::Event,
            "Form Controls",
            r"(?i)<(?:form|input|button|select|textarea|label)\b",
            "Forms and their controls collect input from the user and send it somewhere when submitted.",
            "<input type=\"text\" name=\"email\">",
        ),
        Detector::new(
            Cat::Markup,
            "Hyperlink",
            r#"(?i)<a\s[^>]*\bhref\s*="#,
            "An anchor tag links to another page or location. `href` holds the destination.",
            "<a href=\"about.html\">About</a>",
        ),
        Detector::new(
            Cat::Import,
            "Embedded Script",
            r"(?i)<script\b",
            "Loads or embeds JavaScript that adds behaviour to the page.",
            "<script src=\"app.js\"></script>",
        ),
        Detector::new(
            Cat::Styling,
            "Embedded Style",
            r#"(?i)<style\b|<link\s[^>]*rel\s*=\s*["']?stylesheet|\bstyle\s*=\s*["']"#,
            "Attaches CSS to the page, either inline, in a `<style>` block or via a linked stylesheet.",
            "<link rel=\"stylesheet\" href=\"style.css\">",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub(super) fn css_detectors() -> Vec<Detector> {
    [
        Detector::new(
            Cat::Styling,
            "Class Selector",
            r"(?m)(?:^|[\s,>+~}])\.[A-Za-z_-][\w-]*[^{};]*\{",
            "A `.name` selector styles every element whose `class` attribute contains that name.",
            ".card { padding: 1rem; }",
        ),
        Detector::new(
            Cat::Styling,
            "ID Selector",
            r"(?m)(?:^|[\s,>+~}])#[A-Za-z_-][\w-]*[^{};]*\{",
            "A `#name` selector styles the single element with that `id`. It is more specific than class selectors.",
            "#header { height: 60px; }",
        ),
        Detector::new(
            Cat::Conditional,
            "Media Query",
            r"@media\b",
            "Applies the enclosed rules only when a condition about the screen, such as its width, is true.",
            "@media (max-width: 600px) { ... }",
        ),
        Detector::new(
            Cat::Styling,
            "Flexbox/Grid Layout",
            r"\bdisplay\s*:\s*(?:inline-)?(?:flex|grid)\b",
            "Flexbox and Grid are layout systems that arrange child elements in rows, columns or two-dimensional grids.",
            ".row { display: flex; gap: 8px; }",
        ),
        Detector::new(
            Cat::Styling,
            "Pseudo-Class",
            r"[\w)\]]:(?:hover|focus|active|visited|first-child|last-child|nth-child|not|checked|disabled)\b",
            "A pseudo-class targets an element in a particular state, like when the mouse is over it.",
            "a:hover { color: red; }",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
