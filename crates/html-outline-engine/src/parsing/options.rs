use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tags that become outline items unless configured otherwise.
pub const DEFAULT_ELIGIBLE_TAGS: [&str; 3] = ["p", "div", "span"];

/// Element nesting the builder follows before it stops descending.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How an element's `content` is extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentMode {
    /// The element's own text, trimmed; text inside child elements is dropped.
    #[default]
    StrippedText,
    /// The element's serialized inner markup, formatting tags included.
    RawMarkup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    eligible_tags: BTreeSet<String>,
    content_mode: ContentMode,
    max_depth: usize,
}

impl ParseOptions {
    pub fn new<I, S>(eligible_tags: I, content_mode: ContentMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            eligible_tags: eligible_tags
                .into_iter()
                .map(|tag| normalize_tag(tag.as_ref()))
                .filter(|tag| !tag.is_empty())
                .collect(),
            content_mode,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Extend the allow-list, e.g. with `h1`.
    pub fn with_tag(mut self, tag: &str) -> Self {
        let tag = normalize_tag(tag);
        if !tag.is_empty() {
            self.eligible_tags.insert(tag);
        }
        self
    }

    pub fn with_content_mode(mut self, content_mode: ContentMode) -> Self {
        self.content_mode = content_mode;
        self
    }

    /// Caps recursion on pathologically nested input. Elements deeper than
    /// this contribute no items.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_eligible(&self, tag: &str) -> bool {
        self.eligible_tags.contains(tag)
    }

    /// True when no tag is eligible; such options produce no items at all.
    pub fn is_empty(&self) -> bool {
        self.eligible_tags.is_empty()
    }

    pub fn eligible_tags(&self) -> impl Iterator<Item = &str> {
        self.eligible_tags.iter().map(String::as_str)
    }

    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ELIGIBLE_TAGS, ContentMode::default())
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}
