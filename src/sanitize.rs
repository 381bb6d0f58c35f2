//! Tag filtering for footnote bodies.
//!
//! Works on tag names only: a tag whose name is in the allow-list is kept
//! with its attributes, any other tag is dropped while its text stays.
//! `script` and `style` elements lose their contents as well unless allowed.
//! HTML comments are always removed. A `<` that opens a tag or comment
//! which never closes drops everything after it, so a half-written tag can
//! not be completed by markup appended later. A `<` not followed by a tag
//! name stays as literal text. Filtering repeats until the text is stable,
//! so removing one tag never splices its neighbours into a new one.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::AllowedTags;

static RAW_TEXT_RE: LazyLock<Regex> = lazy_regex!(
    r"(?is)<(?P<name>script|style)\b[^>]*>.*?</(?:script|style)\s*>",
    "raw text element pattern should compile",
);

static TAG_RE: LazyLock<Regex> = lazy_regex!(
    r#"(?s)<!--.*?-->|<!--.*|</?(?P<name>[A-Za-z][A-Za-z0-9-]*)(?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?/?>|</?[A-Za-z].*"#,
    "html tag pattern should compile",
);

/// Remove every tag from `html` whose name is not in `allowed`.
///
/// # Examples
///
/// ```
/// use mdfootnote::{AllowedTags, strip_tags};
///
/// let allowed = AllowedTags::parse("em");
/// assert_eq!(strip_tags("<p>An <em>aside</em></p>", &allowed), "An <em>aside</em>");
/// ```
#[must_use]
pub fn strip_tags(html: &str, allowed: &AllowedTags) -> String {
    let mut current = strip_once(html, allowed);
    loop {
        let next = strip_once(&current, allowed);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One filtering pass; only ever removes text.
fn strip_once(html: &str, allowed: &AllowedTags) -> String {
    let without_raw = RAW_TEXT_RE.replace_all(html, |caps: &Captures| {
        if allowed.allows(&caps["name"]) {
            caps[0].to_string()
        } else {
            String::new()
        }
    });
    TAG_RE
        .replace_all(&without_raw, |caps: &Captures| match caps.name("name") {
            Some(name) if allowed.allows(name.as_str()) => caps[0].to_string(),
            _ => String::new(),
        })
        .into_owned()
}
