//! Plain text rendering for outlines.

use crate::model::Outline;

/// Render an outline as an indented tree, one heading per line.
///
/// Each level indents by two spaces and the page index follows the text.
pub fn to_text(outline: &Outline) -> String {
    let mut output = String::new();

    if !outline.title.is_empty() {
        output.push_str(&outline.title);
        output.push('\n');
    }

    for entry in &outline.outline {
        let indent = "  ".repeat(usize::from(entry.level.depth() - 1));
        output.push_str(&format!(
            "{}{} {} (page {})\n",
            indent, entry.level, entry.text, entry.page
        ));
    }

    output.trim_end().to_string()
}
