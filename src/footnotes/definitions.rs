//! Extraction of footnote definitions from the main text.

use serde::Serialize;

use super::{
    parsing::definition_spans,
    sequence::{FootnoteId, Reference},
};
use crate::{config::AllowedTags, sanitize::strip_tags};

/// A resolved endnote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Footnote {
    pub identifier: String,
    pub index: usize,
    pub id: FootnoteId,
    /// Definition text with disallowed tags removed.
    pub body: String,
}

pub(super) struct Extraction {
    /// Text with every consumed definition removed.
    pub(super) text: String,
    /// Footnotes in reference order.
    pub(super) footnotes: Vec<Footnote>,
}

/// Pull the definitions of `references` out of `text`.
///
/// The first definition of a referenced identifier becomes its footnote and
/// later ones are dropped; both are removed from the text. Definitions of
/// identifiers that were never referenced stay where they are.
pub(super) fn extract_definitions(
    text: &str,
    references: &[Reference],
    allowed: &AllowedTags,
) -> Extraction {
    let mut bodies: Vec<Option<String>> = vec![None; references.len()];
    let mut remaining = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in definition_spans(text) {
        let Some(position) = references
            .iter()
            .position(|reference| reference.identifier == span.identifier)
        else {
            tracing::debug!(identifier = span.identifier, "definition is never referenced, leaving it in place");
            continue;
        };
        if bodies[position].is_some() {
            tracing::debug!(identifier = span.identifier, "discarding repeated definition");
        } else {
            bodies[position] = Some(strip_tags(span.body, allowed));
        }
        remaining.push_str(&text[cursor..span.start]);
        cursor = span.end;
    }
    remaining.push_str(&text[cursor..]);

    let footnotes = references
        .iter()
        .zip(bodies)
        .filter_map(|(reference, body)| {
            body.map(|body| Footnote {
                identifier: reference.identifier.clone(),
                index: reference.index,
                id: reference.id,
                body,
            })
        })
        .collect();

    Extraction {
        text: remaining,
        footnotes,
    }
}
