use std::sync::OnceLock;

use regex::Regex;

/// The structural cue carried by an outline marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `(1)`, `(12)`
    NumericDescend,
    /// `(a)`
    LowerAlphaDescend,
    /// `(A)`
    UpperAlphaDescend,
    /// `12.` with no parentheses
    NumericReturn,
}

impl MarkerKind {
    /// Whether the marker opens a deeper level (as opposed to returning to
    /// the parent level).
    pub fn is_descend(self) -> bool {
        !matches!(self, Self::NumericReturn)
    }
}

/// An outline-style prefix recognized at the start of a node's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineMarker {
    pub kind: MarkerKind,
    /// The matched prefix exactly as written, e.g. `(a)` or `12.`.
    pub raw: String,
}

impl OutlineMarker {
    /// Classifies the leading outline marker of `text`, if any.
    ///
    /// Leading whitespace is ignored. Patterns are tried in a fixed order and
    /// the first match wins; the rest of the text is never rescanned.
    ///
    /// `NumericReturn` also fires on prose such as "12. is the answer". That
    /// false positive is accepted behavior.
    pub fn detect(text: &str) -> Option<Self> {
        let text = text.trim_start();
        patterns().iter().find_map(|(kind, re)| {
            re.captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| Self {
                    kind: *kind,
                    raw: m.as_str().to_string(),
                })
        })
    }
}

fn patterns() -> &'static [(MarkerKind, Regex)] {
    static PATTERNS: OnceLock<Vec<(MarkerKind, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (MarkerKind::NumericDescend, r"^(\([0-9]+\))"),
            (MarkerKind::LowerAlphaDescend, r"^(\([a-z]\))"),
            (MarkerKind::UpperAlphaDescend, r"^(\([A-Z]\))"),
            (MarkerKind::NumericReturn, r"^([0-9]+\.)(?:[^0-9]|$)"),
        ]
        .into_iter()
        .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("Invalid marker regex")))
        .collect()
    })
}
