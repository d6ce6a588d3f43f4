use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Display annotations derived from an item's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemDecoration {
    /// Label of any leading parenthesized word: `(1) x` gives `1`, `(iv) x`
    /// gives `iv`. Wider than the markers that drive indentation.
    pub label: Option<String>,
    /// Text of the first `<em>` element in raw-markup content.
    pub heading: Option<String>,
}

impl ItemDecoration {
    pub fn from_content(content: &str) -> Self {
        let label = label_regex()
            .captures(content.trim_start())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        let heading = emphasis_regex()
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| markup_to_text(m.as_str()))
            .filter(|heading| !heading.is_empty());

        Self { label, heading }
    }
}

/// Flattens a markup fragment to display text: tags removed, entities
/// decoded, runs of whitespace collapsed.
pub fn markup_to_text(markup: &str) -> String {
    let without_tags = tag_regex().replace_all(markup, "");
    let decoded = html_escape::decode_html_entities(&without_tags);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn label_regex() -> &'static Regex {
    static LABEL: OnceLock<Regex> = OnceLock::new();
    LABEL.get_or_init(|| Regex::new(r"^\(([0-9A-Za-z_]+)\)").expect("Invalid label regex"))
}

fn emphasis_regex() -> &'static Regex {
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();
    EMPHASIS.get_or_init(|| {
        Regex::new(r"(?s)<em\b[^>]*>(.*?)</em>").expect("Invalid emphasis regex")
    })
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}
