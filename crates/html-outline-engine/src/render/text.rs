use std::fmt::Write;

use crate::models::ParsedItem;

use super::decoration::markup_to_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    /// Spaces per indent level.
    pub indent_width: usize,
    /// Prefix each element item with `<tag>`.
    pub show_tags: bool,
    /// Flatten markup in content to plain text (for raw-markup parses).
    pub strip_markup: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_tags: false,
            strip_markup: false,
        }
    }
}

/// Renders one line per item, indented by its computed level.
pub fn render_text(items: &[ParsedItem], style: &TextStyle) -> String {
    let mut out = String::new();
    for item in items {
        write_item(&mut out, item, style);
    }
    out
}

fn write_item(out: &mut String, item: &ParsedItem, style: &TextStyle) {
    let indent = " ".repeat(item.indent_level * style.indent_width);
    let tag = if style.show_tags && !item.is_text() {
        format!("<{}> ", item.tag_name)
    } else {
        String::new()
    };
    let content = if style.strip_markup {
        markup_to_text(&item.content)
    } else {
        item.content.clone()
    };
    // Writing to a String cannot fail
    let _ = writeln!(out, "{indent}{tag}{content}");

    for child in &item.children {
        write_item(out, child, style);
    }
}
