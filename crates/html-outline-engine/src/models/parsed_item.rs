use serde::{Deserialize, Serialize};

/// One node of the outline tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// Lowercase tag of the producing element; empty for loose text.
    pub tag_name: String,
    pub content: String,
    /// Computed nesting depth. Never less than the parent's.
    pub indent_level: usize,
    pub children: Vec<ParsedItem>,
}

impl ParsedItem {
    pub fn new(
        tag_name: impl Into<String>,
        content: impl Into<String>,
        indent_level: usize,
        children: Vec<ParsedItem>,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            content: content.into(),
            indent_level,
            children,
        }
    }

    /// A leaf for a loose text node.
    pub fn text(content: impl Into<String>, indent_level: usize) -> Self {
        Self::new(String::new(), content, indent_level, Vec::new())
    }

    pub fn is_text(&self) -> bool {
        self.tag_name.is_empty()
    }

    /// This item followed by all of its descendants, pre-order.
    pub fn walk(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
}

/// Pre-order traversal over a forest of items.
pub fn preorder(items: &[ParsedItem]) -> Preorder<'_> {
    Preorder {
        stack: items.iter().rev().collect(),
    }
}

pub struct Preorder<'a> {
    stack: Vec<&'a ParsedItem>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a ParsedItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.children.iter().rev());
        Some(item)
    }
}
