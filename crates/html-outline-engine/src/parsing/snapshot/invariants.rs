use crate::models::ParsedItem;

/// Validates builder output invariants.
///
/// Asserts that:
/// - Every child's indent level is at least its parent's
/// - Loose text items are leaves with trimmed, non-empty content
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(items: &[ParsedItem]) {
    for item in items {
        check_item(item);
    }
}

fn check_item(item: &ParsedItem) {
    if item.is_text() {
        assert!(
            item.children.is_empty(),
            "text item has children: {:?}",
            item.content
        );
        assert!(
            !item.content.is_empty() && item.content.trim() == item.content,
            "text item content not trimmed or empty: {:?}",
            item.content
        );
    }
    for child in &item.children {
        assert!(
            child.indent_level >= item.indent_level,
            "child level {} below parent level {} (parent {:?}, child {:?})",
            child.indent_level,
            item.indent_level,
            item.content,
            child.content
        );
        check_item(child);
    }
}
