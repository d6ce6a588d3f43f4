//! # Outline Parsing
//!
//! Turns a parsed document into a forest of [`ParsedItem`]s, inferring
//! nesting from both element structure and outline markers in the text.
//!
//! ## Modules
//!
//! - **`options`**: `ParseOptions` (eligible-tag allow-list, `ContentMode`)
//! - **`markers`**: `OutlineMarker::detect` classifies `(1)`, `(a)`, `(A)` and `12.` prefixes
//! - **`indent`**: `IndentStack`, the per-scope stack of marker-entered levels
//! - **`builder`**: `TreeBuilder`, the recursive walk over a [`DocumentAdapter`]
//! - **`snapshot`**: invariant checks and a stable text form for snapshot tests
//!
//! ## Key Invariants
//!
//! - Document order is preserved at every level; nothing is reordered or deduplicated
//! - A child's indent level is never less than its parent's
//! - Ineligible elements are flattened: their eligible descendants are spliced
//!   into the surrounding sibling sequence
//! - No state survives a build; parses are independent and re-entrant

pub mod builder;
pub mod indent;
pub mod markers;
pub mod options;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::TreeBuilder;
pub use indent::IndentStack;
pub use markers::{MarkerKind, OutlineMarker};
pub use options::{ContentMode, DEFAULT_ELIGIBLE_TAGS, DEFAULT_MAX_DEPTH, ParseOptions};

use crate::document::{DocumentAdapter, HtmlDocument, ParseError};
use crate::models::ParsedItem;

/// Builds the outline of an already-parsed document.
pub fn parse_document<D: DocumentAdapter>(doc: &D, options: &ParseOptions) -> Vec<ParsedItem> {
    TreeBuilder::new(options).build(doc)
}

/// Parses markup text and builds its outline.
pub fn parse_markup(markup: &str, options: &ParseOptions) -> Vec<ParsedItem> {
    let doc = HtmlDocument::parse(markup);
    parse_document(&doc, options)
}

/// Parses raw bytes and builds their outline. Fails only on non-text input.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Result<Vec<ParsedItem>, ParseError> {
    let doc = HtmlDocument::from_bytes(bytes)?;
    Ok(parse_document(&doc, options))
}
