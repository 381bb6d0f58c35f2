//! Library for turning Markdown-Extra footnote markers into HTML endnotes.
//!
//! References written as `[^id]` become superscript links and definitions
//! written as `[^id]: text` are gathered into an accessible endnote block.
//! Numbering either restarts for every call or, in continuous mode, carries
//! on across all calls that share one [`Counters`] (typically through a
//! [`RenderContext`]).

#[macro_use]
mod macros;

pub mod config;
pub mod context;
pub mod counters;
pub mod footnotes;
pub mod io;
pub mod markup;
pub mod sanitize;

pub use config::{AllowedTags, ConfigError, DEFAULT_ALLOWED_TAGS, FootnoteConfig};
pub use context::RenderContext;
pub use counters::Counters;
pub use footnotes::{Footnote, FootnoteId, Reference, Transformed, add_footnotes, reference_anchor};
pub use io::rewrite;
pub use markup::render_markup;
pub use sanitize::strip_tags;
