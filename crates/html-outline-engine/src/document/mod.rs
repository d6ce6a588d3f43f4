//! # Document Adapters
//!
//! A read-only view over a parsed DOM-like tree. The tree builder only talks
//! to [`DocumentAdapter`], so it never depends on a particular HTML engine.
//!
//! ## Modules
//!
//! - **`html`**: [`HtmlDocument`], backed by `scraper` (html5ever tree construction)
//!
//! ## Node kinds
//!
//! Adapters distinguish three kinds of node:
//!
//! - text nodes (`is_text` is true, `tag_name` is empty)
//! - element nodes (non-empty lowercase `tag_name`)
//! - everything else (comments, doctypes): neither text nor element, ignored
//!   by the builder

pub mod html;

pub use html::HtmlDocument;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Input is not valid UTF-8 text (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Traversal primitives over a parsed document.
///
/// Node handles are cheap `Copy` values borrowed from the document.
pub trait DocumentAdapter {
    type Node<'a>: Copy
    where
        Self: 'a;

    /// The implicit body container where top-level traversal starts.
    fn body(&self) -> Self::Node<'_>;

    /// Direct children of `node` in document order.
    fn children<'a>(&'a self, node: Self::Node<'a>) -> Vec<Self::Node<'a>>;

    /// Lowercase tag name, or an empty string for anything but an element.
    fn tag_name<'a>(&'a self, node: Self::Node<'a>) -> String;

    fn is_text<'a>(&'a self, node: Self::Node<'a>) -> bool;

    /// All descendant text concatenated in document order.
    fn text_content<'a>(&'a self, node: Self::Node<'a>) -> String;

    /// Text of the node's direct text children only; text inside descendant
    /// elements is dropped.
    fn own_text<'a>(&'a self, node: Self::Node<'a>) -> String;

    /// Serialized inner markup of an element. Empty for non-elements.
    fn inner_markup<'a>(&'a self, node: Self::Node<'a>) -> String;

    fn is_element<'a>(&'a self, node: Self::Node<'a>) -> bool {
        !self.tag_name(node).is_empty()
    }

    fn has_element_children<'a>(&'a self, node: Self::Node<'a>) -> bool {
        self.children(node)
            .into_iter()
            .any(|child| self.is_element(child))
    }
}
