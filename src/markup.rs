//! Endnote block rendering.

use std::fmt::Write;

use crate::{config::FootnoteConfig, footnotes::Footnote};

/// Whitespace emitted in pretty mode, keyed by nesting depth.
fn indent(out: &mut String, pretty: bool, depth: usize) {
    if pretty {
        out.push('\n');
        out.extend(std::iter::repeat_n('\t', depth));
    }
}

fn open_list(out: &mut String, start: Option<usize>) {
    match start {
        Some(start) => {
            write!(out, "<ol start=\"{start}\">").expect("write to string cannot fail");
        }
        None => out.push_str("<ol>"),
    }
}

fn push_item(out: &mut String, footnote: &Footnote, config: &FootnoteConfig) {
    let id = footnote.id;
    indent(out, config.pretty, 2);
    write!(out, "<li id=\"fn{id}\" role=\"doc-endnote\">").expect("write to string cannot fail");
    indent(out, config.pretty, 3);
    write!(
        out,
        "{} <a href=\"#fnref{id}\" class=\"{}\" role=\"doc-backlink\">{}</a>",
        footnote.body, config.backref_class, config.icon
    )
    .expect("write to string cannot fail");
    indent(out, config.pretty, 2);
    out.push_str("</li>");
}

/// Render `footnotes` as an endnote block.
///
/// In continuous mode all notes share one `<ol>` whose `start` is the first
/// note's number. Otherwise a new `<ol>` opens whenever the batch changes, in
/// the order the notes are given. An empty slice renders as an empty string.
///
/// # Examples
///
/// ```
/// use mdfootnote::{Counters, FootnoteConfig, Transformed, add_footnotes, render_markup};
///
/// let config = FootnoteConfig { output_as_array: true, ..FootnoteConfig::default() };
/// let mut counters = Counters::new();
/// let Transformed::Split { footnotes, .. } = add_footnotes("a[^1]\n[^1]: b", &config, &mut counters) else {
///     unreachable!();
/// };
/// assert!(render_markup(&footnotes, &config).contains("<li id=\"fn1:1\" role=\"doc-endnote\">b "));
/// ```
#[must_use]
pub fn render_markup(footnotes: &[Footnote], config: &FootnoteConfig) -> String {
    let Some(first) = footnotes.first() else {
        return String::new();
    };
    let pretty = config.pretty;
    let mut out = String::new();
    write!(
        out,
        "<{} class=\"{}\" role=\"doc-endnotes\">",
        config.tag, config.wrapper_class
    )
    .expect("write to string cannot fail");

    if config.continuous {
        indent(&mut out, pretty, 1);
        open_list(&mut out, Some(first.index));
        for footnote in footnotes {
            push_item(&mut out, footnote, config);
        }
        indent(&mut out, pretty, 1);
        out.push_str("</ol>");
    } else {
        for group in footnotes.chunk_by(|a, b| a.id.batch() == b.id.batch()) {
            indent(&mut out, pretty, 1);
            open_list(&mut out, None);
            for footnote in group {
                push_item(&mut out, footnote, config);
            }
            indent(&mut out, pretty, 1);
            out.push_str("</ol>");
        }
    }

    indent(&mut out, pretty, 0);
    write!(out, "</{}>", config.tag).expect("write to string cannot fail");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footnotes::FootnoteId;

    fn note(batch: usize, index: usize, body: &str) -> Footnote {
        Footnote {
            identifier: index.to_string(),
            index,
            id: FootnoteId::Batched { batch, index },
            body: body.to_string(),
        }
    }

    #[test]
    fn renders_single_batch() {
        let out = render_markup(&[note(1, 1, "One")], &FootnoteConfig::default());
        assert_eq!(
            out,
            concat!(
                "<div class=\"footnotes\" role=\"doc-endnotes\"><ol>",
                "<li id=\"fn1:1\" role=\"doc-endnote\">One ",
                "<a href=\"#fnref1:1\" class=\"footnote-backref\" role=\"doc-backlink\">&#8617;</a></li>",
                "</ol></div>"
            )
        );
    }

    #[test]
    fn opens_a_list_per_batch_change() {
        let notes = [note(1, 1, "a"), note(1, 2, "b"), note(2, 1, "c"), note(1, 3, "d")];
        let out = render_markup(&notes, &FootnoteConfig::default());
        assert_eq!(out.matches("<ol>").count(), 3);
        assert_eq!(out.matches("</ol>").count(), 3);
        let c = out.find("fn2:1").expect("second batch rendered");
        let d = out.find("fn1:3").expect("returning batch rendered");
        assert!(c < d, "batches keep encounter order");
    }

    #[test]
    fn continuous_list_starts_at_first_index() {
        let config = FootnoteConfig {
            continuous: true,
            ..FootnoteConfig::default()
        };
        let notes = [Footnote {
            identifier: "1".to_string(),
            index: 4,
            id: FootnoteId::Continuous { index: 4 },
            body: "x".to_string(),
        }];
        let out = render_markup(&notes, &config);
        assert!(out.contains("<ol start=\"4\"><li id=\"fn4\" role=\"doc-endnote\">x <a href=\"#fnref4\""));
        assert_eq!(out.matches("<ol").count(), 1);
    }

    #[test]
    fn pretty_only_adds_whitespace() {
        let config = FootnoteConfig {
            pretty: true,
            tag: "section".to_string(),
            ..FootnoteConfig::default()
        };
        let out = render_markup(&[note(1, 1, "One")], &config);
        assert_eq!(
            out,
            concat!(
                "<section class=\"footnotes\" role=\"doc-endnotes\">\n",
                "\t<ol>\n",
                "\t\t<li id=\"fn1:1\" role=\"doc-endnote\">\n",
                "\t\t\tOne <a href=\"#fnref1:1\" class=\"footnote-backref\" role=\"doc-backlink\">&#8617;</a>\n",
                "\t\t</li>\n",
                "\t</ol>\n",
                "</section>"
            )
        );
        let compact = render_markup(
            &[note(1, 1, "One")],
            &FootnoteConfig {
                tag: "section".to_string(),
                ..FootnoteConfig::default()
            },
        );
        let stripped: String = out.chars().filter(|c| *c != '\n' && *c != '\t').collect();
        assert_eq!(stripped, compact);
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render_markup(&[], &FootnoteConfig::default()).is_empty());
    }
}
