pub mod parsed_item;

pub use parsed_item::{ParsedItem, Preorder, preorder};
