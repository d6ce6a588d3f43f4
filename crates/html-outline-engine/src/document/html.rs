use std::ops::Deref;

use scraper::{ElementRef, Html};

use super::{DocumentAdapter, ParseError};

/// Node handle into the html5ever tree owned by an [`HtmlDocument`].
///
/// Named through `ElementRef`'s deref target so the tree crate stays an
/// implementation detail of `scraper`.
pub type HtmlNode<'a> = <ElementRef<'a> as Deref>::Target;

/// A parsed HTML document.
///
/// Parsing is maximally permissive: unclosed and unknown tags are repaired
/// the way browsers do it, and the recoverable errors html5ever reports are
/// logged rather than returned.
pub struct HtmlDocument {
    html: Html,
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("errors", &self.html.errors.len())
            .finish_non_exhaustive()
    }
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            log::debug!(
                "Repaired {} markup error(s) while parsing {} bytes",
                html.errors.len(),
                markup.len()
            );
            for error in &html.errors {
                log::trace!("html5ever: {error}");
            }
        }
        Self { html }
    }

    /// Parse raw bytes, failing only when they are not text at all.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let markup = std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(Self::parse(markup))
    }
}

impl DocumentAdapter for HtmlDocument {
    type Node<'a> = HtmlNode<'a>;

    fn body(&self) -> HtmlNode<'_> {
        let root = self.html.root_element();
        root.children()
            .find(|child| {
                child
                    .value()
                    .as_element()
                    .is_some_and(|el| el.name() == "body")
            })
            // Framesets have no body; fall back to the <html> element
            .unwrap_or(*root)
    }

    fn children<'a>(&'a self, node: HtmlNode<'a>) -> Vec<HtmlNode<'a>> {
        node.children().collect()
    }

    fn tag_name<'a>(&'a self, node: HtmlNode<'a>) -> String {
        node.value()
            .as_element()
            .map(|el| el.name().to_ascii_lowercase())
            .unwrap_or_default()
    }

    fn is_text<'a>(&'a self, node: HtmlNode<'a>) -> bool {
        node.value().is_text()
    }

    fn text_content<'a>(&'a self, node: HtmlNode<'a>) -> String {
        node.descendants()
            .filter_map(|n| n.value().as_text())
            .map(|text| &**text)
            .collect()
    }

    fn own_text<'a>(&'a self, node: HtmlNode<'a>) -> String {
        if let Some(text) = node.value().as_text() {
            return text.to_string();
        }
        node.children()
            .filter_map(|child| child.value().as_text())
            .map(|text| &**text)
            .collect()
    }

    fn inner_markup<'a>(&'a self, node: HtmlNode<'a>) -> String {
        ElementRef::wrap(node)
            .map(|el| el.inner_html())
            .unwrap_or_default()
    }
}
