use std::fmt::Write;

use crate::models::ParsedItem;

/// Renders a forest as one line per item: tree depth as two-space
/// indentation, then `tag@level` and the debug-quoted content.
///
/// ```text
/// div@0 ""
///   p@1 "(1) intro"
///   #text@0 "loose"
/// ```
pub fn normalize(items: &[ParsedItem]) -> String {
    let mut out = String::new();
    for item in items {
        write_item(&mut out, item, 0);
    }
    out
}

fn write_item(out: &mut String, item: &ParsedItem, depth: usize) {
    let tag = if item.is_text() {
        "#text"
    } else {
        item.tag_name.as_str()
    };
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{}{tag}@{} {:?}",
        "  ".repeat(depth),
        item.indent_level,
        item.content
    );
    for child in &item.children {
        write_item(out, child, depth + 1);
    }
}
