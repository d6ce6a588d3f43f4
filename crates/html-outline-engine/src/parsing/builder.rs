use std::cell::Cell;

use crate::document::DocumentAdapter;
use crate::models::ParsedItem;

use super::{
    indent::IndentStack,
    markers::OutlineMarker,
    options::{ContentMode, ParseOptions},
};

/// Walks a document and produces the outline forest.
///
/// Each call to [`TreeBuilder::build_scope`] owns a fresh [`IndentStack`]
/// seeded at the scope's level, so marker-driven indentation never leaks
/// between containers or between builds.
///
/// Recursion follows element nesting and is capped at
/// [`ParseOptions::max_depth`]; anything nested deeper is skipped with a
/// warning rather than exhausting the stack.
pub struct TreeBuilder<'o> {
    options: &'o ParseOptions,
    cutoffs: Cell<usize>,
}

impl<'o> TreeBuilder<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            cutoffs: Cell::new(0),
        }
    }

    /// Builds the forest for the whole document, starting at its body at
    /// level 0.
    pub fn build<D: DocumentAdapter>(&self, doc: &D) -> Vec<ParsedItem> {
        let items = self.build_scope(doc, doc.body(), 0);
        log::debug!("Built outline with {} top-level item(s)", items.len());
        items
    }

    /// Builds the items for the children of `node`, based at `level`.
    pub fn build_scope<'a, D: DocumentAdapter>(
        &self,
        doc: &'a D,
        node: D::Node<'a>,
        level: usize,
    ) -> Vec<ParsedItem> {
        self.cutoffs.set(0);
        let items = self.build_nested(doc, node, level, 0);

        let cutoffs = self.cutoffs.get();
        if cutoffs > 0 {
            log::warn!(
                "Skipped {cutoffs} element(s) nested deeper than {} levels",
                self.options.max_depth()
            );
        }
        items
    }

    fn build_nested<'a, D: DocumentAdapter>(
        &self,
        doc: &'a D,
        node: D::Node<'a>,
        level: usize,
        depth: usize,
    ) -> Vec<ParsedItem> {
        let mut items = Vec::new();
        if self.options.is_empty() {
            return items;
        }
        let mut stack = IndentStack::new(level);

        for child in doc.children(node) {
            if doc.is_text(child) {
                let text = doc.text_content(child);
                let text = text.trim();
                if !text.is_empty() {
                    items.push(ParsedItem::text(text, level));
                }
                continue;
            }

            let tag = doc.tag_name(child);
            if tag.is_empty() {
                // comments, doctypes
                continue;
            }

            let content = self.extract_content(doc, child);
            let new_level = match OutlineMarker::detect(&content) {
                Some(marker) => {
                    let new_level = if marker.kind.is_descend() {
                        stack.descend()
                    } else {
                        stack.return_to_parent()
                    };
                    log::trace!(
                        "<{tag}> marker {:?} ({:?}): level {level} -> {new_level}",
                        marker.raw,
                        marker.kind
                    );
                    new_level
                }
                None => level,
            };

            let can_descend = depth + 1 < self.options.max_depth();
            if self.options.is_eligible(&tag) {
                // Text-only elements already carry their text as content
                let children = if !doc.has_element_children(child) {
                    Vec::new()
                } else if can_descend {
                    self.build_nested(doc, child, new_level, depth + 1)
                } else {
                    self.cut_off(&tag, depth);
                    Vec::new()
                };
                items.push(ParsedItem::new(tag, content, new_level, children));
            } else if can_descend {
                items.extend(self.build_nested(doc, child, level, depth + 1));
            } else if !doc.children(child).is_empty() {
                self.cut_off(&tag, depth);
            }
        }

        items
    }

    fn cut_off(&self, tag: &str, depth: usize) {
        log::debug!("Not descending into <{tag}> at depth {depth}");
        self.cutoffs.set(self.cutoffs.get() + 1);
    }

    fn extract_content<'a, D: DocumentAdapter>(&self, doc: &'a D, node: D::Node<'a>) -> String {
        match self.options.content_mode() {
            ContentMode::StrippedText => doc.own_text(node).trim().to_string(),
            ContentMode::RawMarkup => doc.inner_markup(node),
        }
    }
}
