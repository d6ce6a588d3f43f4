use serde::Serialize;

use crate::models::ParsedItem;

use super::decoration::ItemDecoration;

/// JSON view of an item: its fields plus display decorations.
#[derive(Debug, Serialize)]
pub struct RenderedItem<'a> {
    pub tag_name: &'a str,
    pub content: &'a str,
    pub indent_level: usize,
    #[serde(flatten)]
    pub decoration: ItemDecoration,
    pub children: Vec<RenderedItem<'a>>,
}

impl<'a> RenderedItem<'a> {
    pub fn new(item: &'a ParsedItem) -> Self {
        Self {
            tag_name: &item.tag_name,
            content: &item.content,
            indent_level: item.indent_level,
            decoration: ItemDecoration::from_content(&item.content),
            children: item.children.iter().map(RenderedItem::new).collect(),
        }
    }
}

pub fn render_json(items: &[ParsedItem]) -> Result<String, serde_json::Error> {
    let rendered: Vec<_> = items.iter().map(RenderedItem::new).collect();
    serde_json::to_string_pretty(&rendered)
}
