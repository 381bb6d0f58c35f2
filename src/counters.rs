//! Numbering state shared by the calls of one render.

/// Counters carried from one transform call to the next.
///
/// `footnotes_id` identifies the batch produced by a call and advances once
/// per call that emits footnotes. `footnote_index` is the next number handed
/// out in continuous mode; a call numbered per call puts it back to 1, so
/// continuous numbering restarts after a switch of mode. Both start at 1.
/// One value belongs to one render; independent renders use independent
/// values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counters {
    pub footnote_index: usize,
    pub footnotes_id: usize,
}

impl Counters {
    #[must_use]
    pub fn new() -> Self {
        Self {
            footnote_index: 1,
            footnotes_id: 1,
        }
    }

    /// Record a finished call that used batch `footnotes_id` and whose next
    /// continuous number is `next_index`, or `None` for per-call numbering.
    pub(crate) fn commit(&mut self, next_index: Option<usize>) {
        self.footnote_index = next_index.unwrap_or(1);
        self.footnotes_id += 1;
        tracing::trace!(
            footnote_index = self.footnote_index,
            footnotes_id = self.footnotes_id,
            "advanced footnote counters"
        );
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new()
    }
}
