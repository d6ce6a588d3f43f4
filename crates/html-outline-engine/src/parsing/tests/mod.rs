//! Tests for the outline builder.
//!
//! Structural behavior is pinned down against a hand-built synthetic tree;
//! the scraper-backed path is covered by fixture snapshots. Fixtures (.html)
//! and snapshots (.snap) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;

use synthetic::{SyntheticNode, doc, el, text};

use crate::document::{DocumentAdapter, HtmlDocument};
use crate::models::{ParsedItem, preorder};
use crate::parsing::{ContentMode, ParseOptions, TreeBuilder, parse_document, snapshot};

fn build(children: Vec<SyntheticNode>) -> Vec<ParsedItem> {
    build_with(children, &ParseOptions::default())
}

fn build_with(children: Vec<SyntheticNode>, options: &ParseOptions) -> Vec<ParsedItem> {
    let items = TreeBuilder::new(options).build(&doc(children));
    snapshot::invariants(&items);
    items
}

fn p(s: &'static str) -> SyntheticNode {
    el("p", vec![text(s)])
}

/// (tag, content, level) for every item, pre-order.
fn flat(items: &[ParsedItem]) -> Vec<(&str, &str, usize)> {
    preorder(items)
        .map(|i| (i.tag_name.as_str(), i.content.as_str(), i.indent_level))
        .collect()
}

// Synthetic-tree tests

#[test]
fn flat_paragraphs_stay_at_level_zero() {
    let items = build(vec![p("one"), p("two")]);
    assert_eq!(
        items,
        vec![
            ParsedItem::new("p", "one", 0, vec![]),
            ParsedItem::new("p", "two", 0, vec![]),
        ]
    );
}

#[test]
fn loose_text_becomes_leaf_at_scope_level() {
    let items = build(vec![text("  hello  "), text("   "), p("x")]);
    assert_eq!(
        flat(&items),
        vec![("", "hello", 0), ("p", "x", 0)]
    );
}

#[test]
fn descend_marker_enters_deeper_level() {
    let items = build(vec![p("(1) intro")]);
    assert_eq!(items[0].indent_level, 1);
}

#[test]
fn nested_marker_descends_from_container_level() {
    let items = build(vec![el("div", vec![text("(1) intro"), p("(a) sub")])]);

    assert_eq!(
        flat(&items),
        vec![
            ("div", "(1) intro", 1),
            ("", "(1) intro", 1),
            ("p", "(a) sub", 2),
        ]
    );
}

#[test]
fn sibling_markers_keep_descending() {
    let items = build(vec![p("(1) a"), p("(a) b"), p("(A) c")]);
    assert_eq!(
        flat(&items),
        vec![("p", "(1) a", 1), ("p", "(a) b", 2), ("p", "(A) c", 3)]
    );
}

#[test]
fn return_marker_pops_one_level() {
    let items = build(vec![p("(1) a"), p("(a) b"), p("12. back"), p("13. again"), p("(A) c")]);
    assert_eq!(
        flat(&items),
        vec![
            ("p", "(1) a", 1),
            ("p", "(a) b", 2),
            ("p", "12. back", 2),
            ("p", "13. again", 1),
            ("p", "(A) c", 1),
        ]
    );
}

#[test]
fn return_marker_never_drops_below_scope_base() {
    let items = build(vec![el(
        "div",
        vec![text("(1) container"), p("1. first"), p("2. second"), p("3. third")],
    )]);

    // div descends to 1; its children start a fresh scope based at 1
    let levels: Vec<_> = items[0].children.iter().map(|c| c.indent_level).collect();
    assert_eq!(levels, vec![1, 1, 1, 1]);
}

#[test]
fn unmarked_items_use_scope_level_not_running_level() {
    let items = build(vec![p("(1) a"), p("plain")]);
    assert_eq!(flat(&items), vec![("p", "(1) a", 1), ("p", "plain", 0)]);
}

#[test]
fn child_scopes_do_not_share_stack_with_parent() {
    let items = build(vec![
        el("div", vec![p("(1) inner"), p("(a) inner")]),
        p("(A) outer"),
    ]);

    assert_eq!(
        flat(&items),
        vec![
            ("div", "", 0),
            ("p", "(1) inner", 1),
            ("p", "(a) inner", 2),
            ("p", "(A) outer", 1),
        ]
    );
}

#[test]
fn ineligible_wrapper_is_flattened() {
    let wrapped = build(vec![el("section", vec![p("A")])]);
    let bare = build(vec![p("A")]);
    assert_eq!(wrapped, bare);
}

#[test]
fn flattened_items_are_spliced_in_place() {
    let items = build(vec![
        p("before"),
        el("section", vec![p("inside 1"), el("article", vec![p("inside 2")])]),
        p("after"),
    ]);
    assert_eq!(
        flat(&items),
        vec![
            ("p", "before", 0),
            ("p", "inside 1", 0),
            ("p", "inside 2", 0),
            ("p", "after", 0),
        ]
    );
}

#[test]
fn flattened_items_attach_to_nearest_eligible_ancestor() {
    let items = build(vec![el("div", vec![el("ul", vec![el("li", vec![p("item")])])])]);
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].children,
        vec![ParsedItem::new("p", "item", 0, vec![])]
    );
}

#[test]
fn ineligible_marker_still_moves_sibling_levels() {
    let items = build(vec![
        el("section", vec![text("(1) heading"), p("x")]),
        p("(a) y"),
    ]);

    assert_eq!(
        flat(&items),
        vec![("", "(1) heading", 0), ("p", "x", 0), ("p", "(a) y", 2)]
    );
}

#[test]
fn empty_allow_list_yields_nothing() {
    let options = ParseOptions::new(Vec::<String>::new(), ContentMode::StrippedText);
    let items = build_with(
        vec![text("top"), el("div", vec![p("gone"), text("also gone")])],
        &options,
    );
    assert!(items.is_empty());
}

#[test]
fn empty_content_is_still_emitted() {
    let items = build(vec![el("p", vec![]), el("span", vec![text("   ")])]);
    assert_eq!(
        flat(&items),
        vec![("p", "", 0), ("span", "", 0)]
    );
}

#[test]
fn stripped_text_drops_descendant_text() {
    let items = build(vec![el("div", vec![text("own"), el("b", vec![text("bold")])])]);
    assert_eq!(items[0].content, "own");
}

#[test]
fn raw_markup_keeps_inner_tags() {
    let options = ParseOptions::default().with_content_mode(ContentMode::RawMarkup);
    let items = build_with(
        vec![el("p", vec![text("(1) "), el("em", vec![text("Heading")])])],
        &options,
    );

    assert_eq!(items[0].content, "(1) <em>Heading</em>");
    assert_eq!(items[0].indent_level, 1);
}

#[test]
fn extended_allow_list_includes_headings() {
    let options = ParseOptions::default().with_tag("h1");
    let items = build_with(vec![el("h1", vec![text("Title")]), p("body")], &options);
    assert_eq!(flat(&items), vec![("h1", "Title", 0), ("p", "body", 0)]);
}

#[test]
fn comments_are_skipped() {
    let items = build(vec![SyntheticNode::Comment, p("x"), SyntheticNode::Comment]);
    assert_eq!(flat(&items), vec![("p", "x", 0)]);
}

#[test]
fn empty_document_yields_empty_forest() {
    assert!(build(vec![]).is_empty());
    assert!(build(vec![text(" \n\t ")]).is_empty());
}

#[test]
fn build_scope_respects_given_base_level() {
    let options = ParseOptions::default();
    let document = doc(vec![p("(1) x"), p("y")]);
    let builder = TreeBuilder::new(&options);
    let items = builder.build_scope(&document, document.body(), 5);

    assert_eq!(flat(&items), vec![("p", "(1) x", 6), ("p", "y", 5)]);
}

#[test]
fn ineligible_wrapper_starts_a_fresh_stack() {
    let wrapped = build(vec![p("(1) a"), el("section", vec![p("(a) b")])]);
    assert_eq!(flat(&wrapped), vec![("p", "(1) a", 1), ("p", "(a) b", 1)]);

    // Without the wrapper the second marker descends from the first
    let bare = build(vec![p("(1) a"), p("(a) b")]);
    assert_eq!(flat(&bare), vec![("p", "(1) a", 1), ("p", "(a) b", 2)]);
}

#[test]
fn nesting_beyond_max_depth_is_cut_off() {
    let options = ParseOptions::default().with_max_depth(2);
    let items = build_with(
        vec![
            el("div", vec![el("div", vec![el("div", vec![p("deep")])])]),
            p("after"),
        ],
        &options,
    );

    assert_eq!(
        flat(&items),
        vec![("div", "", 0), ("div", "", 0), ("p", "after", 0)]
    );
}

#[test]
fn ineligible_wrapper_at_max_depth_contributes_nothing() {
    let options = ParseOptions::default().with_max_depth(1);
    let items = build_with(
        vec![el("section", vec![p("lost")]), el("br", vec![]), p("kept")],
        &options,
    );
    assert_eq!(flat(&items), vec![("p", "kept", 0)]);
}

// HTML fixture snapshot tests

#[test]
fn fixture_legal_outline() {
    assert_fixture("legal_outline", &ParseOptions::default());
}

#[test]
fn fixture_nested_containers() {
    assert_fixture("nested_containers", &ParseOptions::default());
}

#[test]
fn fixture_raw_markup() {
    let options = ParseOptions::default()
        .with_tag("h1")
        .with_content_mode(ContentMode::RawMarkup);
    assert_fixture("raw_markup", &options);
}

fn assert_fixture(name: &str, options: &ParseOptions) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let html = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let doc = HtmlDocument::parse(&html);
    let items = parse_document(&doc, options);
    snapshot::invariants(&items);

    let snap = snapshot::normalize(&items);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}
