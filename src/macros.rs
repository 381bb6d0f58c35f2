//! Helper macros used across the crate.

/// Lazily compile a [`Regex`](regex::Regex), panicking with `$msg` if the
/// hardcoded pattern is invalid.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static MARKER_RE: LazyLock<Regex> = mdfootnote::lazy_regex!(r"\[\^\w+\]", "marker");
/// assert!(MARKER_RE.is_match("see[^1]"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
