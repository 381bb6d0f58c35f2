//! Number assignment for confirmed references.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::Counters;

/// Anchor key shared by a reference (`fnref{id}`) and its endnote (`fn{id}`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FootnoteId {
    /// Per-call numbering; rendered as `batch:index`.
    Batched { batch: usize, index: usize },
    /// Continuous numbering; rendered as `index`.
    Continuous { index: usize },
}

impl FootnoteId {
    /// Batch that produced the footnote, when numbering restarts per call.
    #[must_use]
    pub fn batch(self) -> Option<usize> {
        match self {
            Self::Batched { batch, .. } => Some(batch),
            Self::Continuous { .. } => None,
        }
    }
}

impl fmt::Display for FootnoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batched { batch, index } => write!(f, "{batch}:{index}"),
            Self::Continuous { index } => write!(f, "{index}"),
        }
    }
}

impl Serialize for FootnoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A reference whose identifier has a definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub identifier: String,
    pub index: usize,
    pub id: FootnoteId,
    /// The marker as written, e.g. `[^1]`.
    pub raw: String,
}

/// References numbered for one call.
pub(super) struct Sequence {
    pub(super) references: Vec<Reference>,
    /// Next continuous number, `None` when numbering restarts per call.
    pub(super) next_index: Option<usize>,
}

/// Number `identifiers` in order, starting from the shared counter in
/// continuous mode and from 1 otherwise.
pub(super) fn assign_numbers(identifiers: &[&str], counters: &Counters, continuous: bool) -> Sequence {
    let first = if continuous { counters.footnote_index } else { 1 };
    let batch = counters.footnotes_id;
    let references: Vec<Reference> = identifiers
        .iter()
        .zip(first..)
        .map(|(&identifier, index)| Reference {
            identifier: identifier.to_string(),
            index,
            id: if continuous {
                FootnoteId::Continuous { index }
            } else {
                FootnoteId::Batched { batch, index }
            },
            raw: format!("[^{identifier}]"),
        })
        .collect();
    let next_index = continuous.then_some(first + references.len());
    Sequence {
        references,
        next_index,
    }
}
