//! Marker scanning shared by the reference and definition passes.
//!
//! A marker is `[^id]` where `id` is one or more word characters. A marker
//! directly followed by `:` opens a definition; any other marker is a
//! reference. A definition body runs until the next definition marker or the
//! end of the text.

use std::{collections::HashSet, sync::LazyLock};

use regex::{Match, Regex};

pub(super) static MARKER_RE: LazyLock<Regex> = lazy_regex!(
    r"\[\^(?P<id>\w+)\]",
    "footnote marker pattern should compile",
);

/// Whether the marker at `mat` opens a definition.
#[inline]
pub(super) fn is_definition_marker(text: &str, mat: &Match) -> bool {
    text[mat.end()..].starts_with(':')
}

/// Iterate over the identifiers of reference markers in order.
fn reference_ids(text: &str) -> impl Iterator<Item = &str> {
    MARKER_RE.captures_iter(text).filter_map(move |caps| {
        let mat = caps.get(0)?;
        if is_definition_marker(text, &mat) {
            None
        } else {
            caps.name("id").map(|id| id.as_str())
        }
    })
}

/// Whether `text` contains at least one reference marker.
pub(super) fn has_reference(text: &str) -> bool {
    reference_ids(text).next().is_some()
}

/// Collect the identifiers that are referenced and also defined, in order of
/// their first reference.
pub(super) fn confirmed_identifiers(text: &str) -> Vec<&str> {
    let defined: HashSet<&str> = definition_spans(text)
        .into_iter()
        .map(|span| span.identifier)
        .collect();
    let mut seen = HashSet::new();
    let mut confirmed = Vec::new();
    for id in reference_ids(text) {
        if !seen.insert(id) {
            continue;
        }
        if defined.contains(id) {
            confirmed.push(id);
        } else {
            tracing::debug!(identifier = id, "reference has no definition, leaving it as text");
        }
    }
    confirmed
}

/// A definition located in the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct DefinitionSpan<'a> {
    pub(super) identifier: &'a str,
    /// Byte offset of the opening `[`.
    pub(super) start: usize,
    /// Byte offset just past the body.
    pub(super) end: usize,
    /// Text after the marker with surrounding whitespace trimmed.
    pub(super) body: &'a str,
}

/// Split every definition out of `text`.
///
/// Spans are contiguous: each one ends where the next definition marker
/// starts, and the last one runs to the end of the text.
pub(super) fn definition_spans(text: &str) -> Vec<DefinitionSpan<'_>> {
    let heads: Vec<(&str, usize, usize)> = MARKER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let mat = caps.get(0)?;
            if !is_definition_marker(text, &mat) {
                return None;
            }
            let id = caps.name("id")?.as_str();
            // skip the colon
            Some((id, mat.start(), mat.end() + 1))
        })
        .collect();

    heads
        .iter()
        .enumerate()
        .map(|(i, &(identifier, start, body_start))| {
            let end = heads.get(i + 1).map_or(text.len(), |&(_, next, _)| next);
            DefinitionSpan {
                identifier,
                start,
                end,
                body: text[body_start..end].trim(),
            }
        })
        .collect()
}
