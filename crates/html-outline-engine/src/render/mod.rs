//! Presentation of a parsed outline for terminals and other programs.

pub mod decoration;
pub mod json;
pub mod text;

pub use decoration::{ItemDecoration, markup_to_text};
pub use json::{RenderedItem, render_json};
pub use text::{TextStyle, render_text};
