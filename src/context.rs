//! Render-scoped footnote state.
//!
//! A [`RenderContext`] stands for one logical render, such as one page made
//! of several text fields. Every call made through it shares the same
//! [`Counters`], so batch ids advance per call and continuous numbering runs
//! across calls. Separate renders should use separate contexts.

use crate::{
    config::FootnoteConfig,
    counters::Counters,
    footnotes::{Transformed, add_footnotes},
};

#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    defaults: FootnoteConfig,
    counters: Counters,
}

impl RenderContext {
    #[must_use]
    pub fn new(defaults: FootnoteConfig) -> Self {
        Self {
            defaults,
            counters: Counters::new(),
        }
    }

    /// Configuration used by [`format`](Self::format).
    #[must_use]
    pub fn defaults(&self) -> &FootnoteConfig {
        &self.defaults
    }

    #[must_use]
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Transform `text` with the context's default configuration.
    pub fn format<'a>(&mut self, text: &'a str) -> Transformed<'a> {
        add_footnotes(text, &self.defaults, &mut self.counters)
    }

    /// Transform `text` with a configuration for this call only.
    pub fn format_with<'a>(&mut self, text: &'a str, config: &FootnoteConfig) -> Transformed<'a> {
        add_footnotes(text, config, &mut self.counters)
    }

    /// Transform the content of the named field with the default
    /// configuration, recording the field name in the tracing span.
    pub fn format_field<'a>(&mut self, field: &str, text: &'a str) -> Transformed<'a> {
        let span = tracing::debug_span!("footnotes", field);
        let _guard = span.enter();
        self.format(text)
    }

    /// Start a new render, restoring both counters to 1.
    pub fn reset(&mut self) {
        self.counters = Counters::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batches_advance_per_successful_call() {
        let mut ctx = RenderContext::default();
        let first = ctx.format("a[^1]\n[^1]: one").into_text();
        let skipped = ctx.format("no notes").into_text();
        let second = ctx.format_field("body", "b[^1]\n[^1]: two").into_text();
        assert!(first.contains("fnref1:1"));
        assert_eq!(skipped, "no notes");
        assert!(second.contains("fnref2:1"));
        assert_eq!(ctx.counters().footnotes_id, 3);
    }

    #[test]
    fn per_call_config_overrides_defaults() {
        let mut ctx = RenderContext::new(FootnoteConfig::default());
        let config = FootnoteConfig {
            reference_class: "ref".to_string(),
            ..ctx.defaults().clone()
        };
        let out = ctx.format_with("a[^1]\n[^1]: one", &config).into_text();
        assert!(out.contains("class=\"ref\""));
    }

    #[test]
    fn reset_restarts_numbering() {
        let mut ctx = RenderContext::default();
        let _ = ctx.format("a[^1]\n[^1]: one");
        ctx.reset();
        assert_eq!(ctx.counters(), Counters::new());
        assert!(ctx.format("a[^1]\n[^1]: one").text().contains("fnref1:1"));
    }
}
