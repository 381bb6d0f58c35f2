//! Utility helpers shared across integration tests.
#![allow(dead_code, unused_macros, reason = "each test crate uses a different subset")]

use std::collections::HashMap;

use html5ever::{driver::ParseOpts, parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use rstest::fixture;

/// Join lines with `\n`, without a trailing newline.
///
/// Keeps multi-line documents readable in test bodies.
macro_rules! doc {
    ($($line:expr),* $(,)?) => {
        [$($line),*].join("\n")
    };
}

/// A single document with two notes, the second referenced twice.
#[fixture]
pub fn two_note_document() -> String {
    doc!(
        "Alpha[^1] and beta[^2].",
        "Beta again[^2].",
        "[^1]: First <em>note</em>",
        "[^2]: Second note",
    )
}

/// An element found in parsed markup.
#[derive(Debug)]
pub struct Element {
    pub tag: String,
    pub attrs: HashMap<String, String>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

fn collect_elements(handle: &Handle, out: &mut Vec<Element>) {
    if let NodeData::Element { name, attrs, .. } = &handle.data {
        let attrs = attrs
            .borrow()
            .iter()
            .map(|attr| (attr.name.local.as_ref().to_string(), String::from(&*attr.value)))
            .collect();
        out.push(Element {
            tag: name.local.as_ref().to_string(),
            attrs,
        });
    }
    for child in handle.children.borrow().iter() {
        collect_elements(child, out);
    }
}

/// Parse `html` with an HTML5 parser and list its elements in document
/// order.
pub fn parse_elements(html: &str) -> Vec<Element> {
    let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default()).one(html.to_string());
    let mut out = Vec::new();
    collect_elements(&dom.document, &mut out);
    out
}

/// Elements carrying the given ARIA `role`.
pub fn with_role<'a>(elements: &'a [Element], role: &str) -> Vec<&'a Element> {
    elements
        .iter()
        .filter(|element| element.attr("role") == Some(role))
        .collect()
}

/// Assert that every note reference points at an endnote and every endnote
/// back-link points at a reference.
pub fn assert_links_resolve(html: &str) {
    let elements = parse_elements(html);
    let ids: Vec<&str> = elements.iter().filter_map(|e| e.attr("id")).collect();
    for link in with_role(&elements, "doc-noteref")
        .into_iter()
        .chain(with_role(&elements, "doc-backlink"))
    {
        let href = link.attr("href").expect("note link without href");
        let target = href.strip_prefix('#').expect("note link is not a fragment");
        assert!(ids.contains(&target), "dangling note link {href}");
    }
}
