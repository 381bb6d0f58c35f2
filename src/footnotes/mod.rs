//! Footnote linking.
//!
//! Turns Markdown-Extra footnote markers into HTML. References (`[^id]`)
//! become superscript anchors, definitions (`[^id]: text`) are removed from
//! the text and rendered as an endnote block with back-links. Work is split
//! across submodules: marker scanning, numbering, reference rewriting and
//! definition extraction.

mod definitions;
mod link;
mod parsing;
mod sequence;

use std::borrow::Cow;

pub use definitions::Footnote;
pub use link::reference_anchor;
pub use sequence::{FootnoteId, Reference};

use crate::{config::FootnoteConfig, counters::Counters, markup::render_markup};

use definitions::extract_definitions;
use link::link_references;
use parsing::{confirmed_identifiers, has_reference};
use sequence::assign_numbers;

/// Result of [`add_footnotes`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transformed<'a> {
    /// Text with the endnote block appended, or the input when nothing
    /// applied.
    Markup(Cow<'a, str>),
    /// Linked text without the endnote block, plus the footnotes to render.
    Split {
        text: Cow<'a, str>,
        footnotes: Vec<Footnote>,
    },
}

impl<'a> Transformed<'a> {
    fn unchanged(text: &'a str, config: &FootnoteConfig) -> Self {
        if config.output_as_array {
            Self::Split {
                text: Cow::Borrowed(text),
                footnotes: Vec::new(),
            }
        } else {
            Self::Markup(Cow::Borrowed(text))
        }
    }

    /// The transformed text, with or without endnotes depending on the mode.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Markup(text) | Self::Split { text, .. } => text,
        }
    }

    /// Footnotes returned in structured mode; empty in markup mode.
    #[must_use]
    pub fn footnotes(&self) -> &[Footnote] {
        match self {
            Self::Markup(_) => &[],
            Self::Split { footnotes, .. } => footnotes,
        }
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Markup(text) | Self::Split { text, .. } => text.into_owned(),
        }
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Link footnote references in `text` and collect their definitions.
///
/// Counters are read before numbering and advanced once when at least one
/// footnote is produced. The input comes back untouched when it is empty,
/// holds no reference, or no reference has a definition.
///
/// # Examples
///
/// ```
/// use mdfootnote::{Counters, FootnoteConfig, add_footnotes};
///
/// let mut counters = Counters::new();
/// let out = add_footnotes(
///     "This is a reference[^1] within a text\n[^1]: And this is a footnote",
///     &FootnoteConfig::default(),
///     &mut counters,
/// );
/// assert!(out.text().starts_with("This is a reference<sup id=\"fnref1:1\""));
/// assert!(out.text().ends_with("</ol></div>"));
/// assert_eq!(counters.footnotes_id, 2);
/// ```
#[must_use]
pub fn add_footnotes<'a>(
    text: &'a str,
    config: &FootnoteConfig,
    counters: &mut Counters,
) -> Transformed<'a> {
    if text.trim().is_empty() || !has_reference(text) {
        return Transformed::unchanged(text, config);
    }

    let source = normalize_line_endings(text);
    let identifiers = confirmed_identifiers(&source);
    if identifiers.is_empty() {
        return Transformed::unchanged(text, config);
    }

    let sequence = assign_numbers(&identifiers, counters, config.continuous);
    let linked = link_references(&source, &sequence.references, &config.reference_class);
    let extraction = extract_definitions(&linked, &sequence.references, &config.allowed_tags);
    if extraction.footnotes.is_empty() {
        return Transformed::unchanged(text, config);
    }

    counters.commit(sequence.next_index);
    tracing::debug!(
        footnotes = extraction.footnotes.len(),
        batch = counters.footnotes_id - 1,
        continuous = config.continuous,
        "linked footnotes"
    );

    let body = extraction.text.trim_end();
    if config.output_as_array {
        return Transformed::Split {
            text: Cow::Owned(body.to_string()),
            footnotes: extraction.footnotes,
        };
    }
    let markup = render_markup(&extraction.footnotes, config);
    let joined = if body.is_empty() {
        markup
    } else {
        format!("{body}\n{markup}")
    };
    Transformed::Markup(Cow::Owned(joined))
}
