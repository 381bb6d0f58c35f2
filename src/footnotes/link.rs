//! In-place rewriting of reference markers into note anchors.

use std::collections::HashMap;

use regex::Captures;

use super::{
    parsing::{MARKER_RE, is_definition_marker},
    sequence::Reference,
};

/// Build the superscript anchor for `reference`.
#[must_use]
pub fn reference_anchor(reference: &Reference, class: &str) -> String {
    let id = reference.id;
    format!(
        "<sup id=\"fnref{id}\" class=\"{class}\"><a href=\"#fn{id}\" role=\"doc-noteref\">{}</a></sup>",
        reference.index
    )
}

/// Replace every reference marker of a confirmed identifier.
///
/// Repeated markers of one identifier all link to the same note and share
/// one `fnref` id. Definition markers and unconfirmed references are left
/// as they are.
pub(super) fn link_references(text: &str, references: &[Reference], class: &str) -> String {
    let anchors: HashMap<&str, String> = references
        .iter()
        .map(|reference| (reference.identifier.as_str(), reference_anchor(reference, class)))
        .collect();
    MARKER_RE
        .replace_all(text, |caps: &Captures| {
            let mat = caps.get(0).expect("regex matched without capture");
            if is_definition_marker(text, &mat) {
                return caps[0].to_string();
            }
            anchors
                .get(&caps["id"])
                .map_or_else(|| caps[0].to_string(), Clone::clone)
        })
        .into_owned()
}
