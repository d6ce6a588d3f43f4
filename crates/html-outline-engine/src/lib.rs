pub mod document;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use document::{DocumentAdapter, HtmlDocument, ParseError};
pub use models::{ParsedItem, Preorder, preorder};
pub use parsing::{ContentMode, ParseOptions, TreeBuilder, parse_bytes, parse_document, parse_markup};
