//! File helpers for rewriting documents in place.

use std::{fs, path::Path};

use crate::{context::RenderContext, footnotes::Transformed};

/// Rewrite a file in place with linked footnotes and an endnote block.
///
/// Structured output is meaningless for a file, so the call is made in
/// markup mode whatever the context's defaults say. The file is only
/// written when the text changed. Returns whether it was rewritten.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, ctx: &mut RenderContext) -> std::io::Result<bool> {
    let text = fs::read_to_string(path)?;
    let config = crate::FootnoteConfig {
        output_as_array: false,
        ..ctx.defaults().clone()
    };
    let fixed = match ctx.format_with(&text, &config) {
        Transformed::Markup(fixed) => fixed,
        Transformed::Split { text, .. } => text,
    };
    if fixed == text.as_str() {
        return Ok(false);
    }
    fs::write(path, format!("{fixed}\n"))?;
    Ok(true)
}
