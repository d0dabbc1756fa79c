//! HTML and CSS line rules

use clp_domain::value_objects::SupportedLanguage;
use regex::Captures;

use crate::analysis::patterns::{LineRule, RuleSet, cap};

fn section_role(tag: &str) -> &'static str {
    match tag {
        "header" => "introductory content such as a logo or title",
        "nav" => "the main navigation links",
        "main" => "the primary content of the page",
        "section" => "a themed group of content",
        "article" => "a self-contained piece of content",
        "aside" => "side content related to the main content",
        _ => "closing information such as copyright and contact links",
    }
}

fn heading(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let level = cap(c, 1);
    let rank = if level == "1" {
        "the main heading".to_string()
    } else {
        format!("a level {level} heading")
    };
    match cap(c, 2) {
        "" => format!("Displays {rank}."),
        text => format!("Displays {rank} reading \"{text}\"."),
    }
}

fn link(c: &Captures<'_>, _: SupportedLanguage) -> String {
    match cap(c, 2) {
        "" => format!("Creates a link to `{}`.", cap(c, 1)),
        label => format!("Creates a link labelled \"{label}\" that goes to `{}`.", cap(c, 1)),
    }
}

fn container(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let tag = cap(c, 1).to_lowercase();
    let kind = if tag == "div" {
        "block container"
    } else {
        "inline container"
    };
    match cap(c, 2) {
        "" => format!("Starts a `<{tag}>` {kind} used to group and style content."),
        class => format!(
            "Starts a `<{tag}>` {kind} with the class `{class}`, used to group and style content."
        ),
    }
}

fn property(c: &Captures<'_>, _: SupportedLanguage) -> String {
    let (name, value) = (cap(c, 1).to_lowercase(), cap(c, 2).trim_end_matches(';').trim());
    match name.as_str() {
        "color" => format!("Sets the text color to `{value}`."),
        "background" | "background-color" => format!("Sets the background to `{value}`."),
        "margin" | "margin-top" | "margin-bottom" | "margin-left" | "margin-right" => {
            format!("Sets the space outside the element's border (`{name}`) to `{value}`.")
        }
        "padding" | "padding-top" | "padding-bottom" | "padding-left" | "padding-right" => {
            format!("Sets the space inside the element's border (`{name}`) to `{value}`.")
        }
        "font-size" => format!("Sets the text size to `{value}`."),
        "font-family" => format!("Chooses the font `{value}` for the text."),
        "font-weight" => format!("Sets how bold the text is to `{value}`."),
        "text-align" => format!("Aligns the text to `{value}`."),
        "width" | "max-width" | "min-width" => format!("Sets the `{name}` of the element to `{value}`."),
        "height" | "max-height" | "min-height" => format!("Sets the `{name}` of the element to `{value}`."),
        "border" => format!("Draws a border described by `{value}` around the element."),
        "border-radius" => format!("Rounds the corners of the element by `{value}`."),
        "display" => match value {
            "flex" | "inline-flex" => {
                "Lays out the children in a flexible row or column (Flexbox).".to_string()
            }
            "grid" | "inline-grid" => "Lays out the children on a two-dimensional grid.".to_string(),
            "none" => "Hides the element completely.".to_string(),
            other => format!("Sets how the element is displayed to `{other}`."),
        },
        "justify-content" => format!("Distributes the children along the main axis using `{value}`."),
        "align-items" => format!("Aligns the children on the cross axis using `{value}`."),
        "flex-direction" => format!("Arranges flex children in the `{value}` direction."),
        "gap" => format!("Puts a gap of `{value}` between the children."),
        "position" => format!("Sets the positioning scheme to `{value}`."),
        "box-shadow" => format!("Adds a shadow described by `{value}`."),
        "transition" => format!("Animates property changes smoothly: `{value}`."),
        "cursor" => format!("Changes the mouse cursor to `{value}` over the element."),
        _ => format!("Sets the `{name}` property to `{value}`."),
    }
}

fn pseudo_state(state: &str) -> &'static str {
    match state.split('(').next().unwrap_or(state) {
        "hover" => "while the mouse is over it",
        "focus" => "while it has keyboard focus",
        "active" => "while it is being clicked",
        "visited" => "after the link has been visited",
        "first-child" => "when it is the first child of its parent",
        "last-child" => "when it is the last child of its parent",
        "nth-child" => "when it matches the given position among its siblings",
        "checked" => "when it is checked",
        "disabled" => "when it is disabled",
        _ => "when it does not match the given selector",
    }
}

pub(super) fn html_rules() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new("html-doctype", r"(?i)^<!doctype\s+html", |_, _| {
            "Declares this document as HTML5 so the browser renders it in standards mode.".to_string()
        }),
        LineRule::new("html-root", r"(?i)^<html\b", |_, _| {
            "Starts the root `<html>` element that wraps the whole page.".to_string()
        }),
        LineRule::new("html-head", r"(?i)^<head>", |_, _| {
            "Starts the head section, which holds information about the page such as its title and styles."
                .to_string()
        }),
        LineRule::new("html-charset", r"(?i)^<meta\b[^>]*charset", |_, _| {
            "Sets the character encoding so all text displays correctly.".to_string()
        }),
        LineRule::new("html-viewport", r"(?i)^<meta\b[^>]*viewport", |_, _| {
            "Makes the page scale correctly on mobile screens.".to_string()
        }),
        LineRule::new("html-meta", r"(?i)^<meta\b", |_, _| {
            "Adds metadata describing the page.".to_string()
        }),
        LineRule::new("html-title", r"(?i)^<title>(.*?)</title>", |c, _| {
            format!(
                "Sets the page title shown in the browser tab to \"{}\".",
                cap(c, 1)
            )
        }),
        LineRule::new(
            "html-stylesheet",
            r#"(?i)^<link\b[^>]*href\s*=\s*["']([^"']+)["']"#,
            |c, _| format!("Links the external stylesheet `{}` to style the page.", cap(c, 1)),
        ),
        LineRule::new(
            "html-script-src",
            r#"(?i)^<script\b[^>]*src\s*=\s*["']([^"']+)["']"#,
            |c, _| format!("Loads the JavaScript file `{}`.", cap(c, 1)),
        ),
        LineRule::new("html-script", r"(?i)^<script\b", |_, _| {
            "Starts a block of JavaScript embedded in the page.".to_string()
        }),
        LineRule::new("html-style", r"(?i)^<style\b", |_, _| {
            "Starts a block of CSS rules embedded in the page.".to_string()
        }),
        LineRule::new("html-body", r"(?i)^<body\b", |_, _| {
            "Starts the body, which contains everything visible on the page.".to_string()
        }),
        LineRule::new(
            "html-heading",
            r"(?i)^<h([1-6])\b[^>]*>(.*?)(?:</h[1-6]>)?$",
            heading,
        ),
        LineRule::new("html-paragraph", r"(?i)^<p\b[^>]*>", |_, _| {
            "Displays a paragraph of text.".to_string()
        }),
        LineRule::new(
            "html-link",
            r#"(?i)^<a\b[^>]*href\s*=\s*["']([^"']*)["'][^>]*>([^<]*)"#,
            link,
        ),
        LineRule::new(
            "html-image",
            r#"(?i)^<img\b[^>]*src\s*=\s*["']([^"']*)["']"#,
            |c, _| format!("Displays the image `{}`.", cap(c, 1)),
        ),
        LineRule::new("html-list", r"(?i)^<(ul|ol)\b", |c, _| {
            if cap(c, 1).eq_ignore_ascii_case("ol") {
                "Starts an ordered (numbered) list.".to_string()
            } else {
                "Starts an unordered (bulleted) list.".to_string()
            }
        }),
        LineRule::new("html-list-item", r"(?i)^<li\b[^>]*>([^<]*)", |c, _| {
            match cap(c, 1) {
                "" => "Adds an item to the list.".to_string(),
                text => format!("Adds the item \"{text}\" to the list."),
            }
        }),
        LineRule::new("html-form", r"(?i)^<form\b", |_, _| {
            "Starts a form that collects user input and submits it.".to_string()
        }),
        LineRule::new(
            "html-input",
            r#"(?i)^<input\b(?:[^>]*\btype\s*=\s*["']?(\w+))?"#,
            |c, _| match cap(c, 1) {
                "" => "Adds an input field where the user can enter data.".to_string(),
                kind => format!("Adds a `{kind}` input field where the user can enter data."),
            },
        ),
        LineRule::new("html-button", r"(?i)^<button\b[^>]*>([^<]*)", |c, _| {
            match cap(c, 1) {
                "" => "Adds a clickable button.".to_string(),
                label => format!("Adds a clickable button labelled \"{label}\"."),
            }
        }),
        LineRule::new("html-label", r"(?i)^<label\b", |_, _| {
            "Adds a text label that describes a form control.".to_string()
        }),
        LineRule::new(
            "html-section",
            r"(?i)^<(header|nav|main|section|article|aside|footer)\b",
            |c, _| {
                let tag = cap(c, 1).to_lowercase();
                format!(
                    "Starts the `<{tag}>` section, a semantic region for {}.",
                    section_role(&tag)
                )
            },
        ),
        LineRule::new(
            "html-container",
            r#"(?i)^<(div|span)\b(?:[^>]*\bclass\s*=\s*["']([^"']*)["'])?"#,
            container,
        ),
        LineRule::new("html-table", r"(?i)^<table\b", |_, _| {
            "Starts a table for displaying data in rows and columns.".to_string()
        }),
        LineRule::new("html-row", r"(?i)^<tr\b", |_, _| {
            "Starts a table row.".to_string()
        }),
        LineRule::new("html-cell", r"(?i)^<t[dh]\b", |_, _| {
            "Adds a table cell.".to_string()
        }),
        LineRule::new("html-close", r"^</(\w+)>$", |c, _| {
            format!("Closes the `<{}>` element.", cap(c, 1).to_lowercase())
        }),
        LineRule::new("html-element", r"^<(\w+)", |c, _| {
            format!("Starts a `<{}>` element.", cap(c, 1).to_lowercase())
        }),
        LineRule::new("html-text", r"^[^<]+$", |c, _| {
            format!("Plain text content shown on the page: \"{}\".", cap(c, 0))
        }),
    ])
}

pub(super) fn css_rules() -> RuleSet {
    RuleSet::from_rules([
        LineRule::new("css-media", r"^@media\s+(.+?)\s*\{?$", |c, _| {
            format!(
                "Starts a media query: the rules inside apply only when `{}` is true.",
                cap(c, 1)
            )
        }),
        LineRule::new("css-import", r"^@import\s+(.+?);?$", |c, _| {
            format!("Imports another stylesheet, `{}`.", cap(c, 1))
        }),
        LineRule::new("css-keyframes", r"^@keyframes\s+([\w-]+)", |c, _| {
            format!("Defines the keyframes of the `{}` animation.", cap(c, 1))
        }),
        LineRule::new("css-font-face", r"^@font-face\b", |_, _| {
            "Declares a custom font that the page can use.".to_string()
        }),
        LineRule::new("css-close", r"^\}$", |_, _| {
            "Closes the current rule block.".to_string()
        }),
        LineRule::new("css-root", r"^:root\s*\{", |_, _| {
            "Starts a rule for the document root, commonly used to define custom properties."
                .to_string()
        }),
        LineRule::new(
            "css-custom-property",
            r"^--([\w-]+)\s*:\s*(.+?);?$",
            |c, _| {
                format!(
                    "Defines the custom property `--{0}` with the value `{1}`, reusable anywhere as `var(--{0})`.",
                    cap(c, 1),
                    cap(c, 2)
                )
            },
        ),
        LineRule::new(
            "css-pseudo",
            r"^([^{]*?):(hover|focus|active|visited|first-child|last-child|nth-child\([^)]*\)|not\([^)]*\)|checked|disabled)[^{]*\{",
            |c, _| {
                format!(
                    "Styles `{}` {}.",
                    cap(c, 1),
                    pseudo_state(cap(c, 2))
                )
            },
        ),
        LineRule::new("css-class", r"^\.([\w-]+)[^{]*\{", |c, _| {
            format!(
                "Starts a rule for every element with the class `{}`.",
                cap(c, 1)
            )
        }),
        LineRule::new("css-id", r"^#([\w-]+)[^{]*\{", |c, _| {
            format!("Starts a rule for the element with the id `{}`.", cap(c, 1))
        }),
        LineRule::new("css-selector", r"^([^{:;]+?)\s*\{", |c, _| match cap(c, 1) {
            "*" => "Starts a rule that applies to every element.".to_string(),
            selector if selector.contains(',') => {
                format!("Starts a rule shared by the selectors `{selector}`.")
            }
            selector => format!("Starts a rule for `{selector}` elements."),
        }),
        LineRule::new("css-property", r"^([\w-]+)\s*:\s*(.+?)\s*;?$", property),
    ])
}
