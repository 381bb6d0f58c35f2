//! Typed configuration for the footnote transform.
//!
//! [`FootnoteConfig`] is a fixed record with defaults for every option. It can
//! be built in code (struct update syntax over [`FootnoteConfig::default`]) or
//! read from a TOML file whose keys use kebab-case. Missing keys keep their
//! defaults and unknown keys are rejected.

use std::{collections::HashSet, fmt, fs, path::Path};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Inline tags kept in footnote bodies unless configured otherwise.
pub const DEFAULT_ALLOWED_TAGS: &str = "abbr|a|bdi|bdo|br|b|cite|code|data|del|dfn|em|ins|i|kbd|mark|q|small|span|strong|sub|sup|s|time|var";

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid footnote configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options controlling reference anchors and the endnote block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FootnoteConfig {
    /// Element wrapping the endnote lists.
    pub tag: String,
    /// Back-link content; may be an entity, `<img>` or `<svg>` markup.
    pub icon: String,
    pub wrapper_class: String,
    pub reference_class: String,
    pub backref_class: String,
    /// Keep numbering across calls sharing one [`Counters`](crate::Counters).
    pub continuous: bool,
    /// Return the footnotes to the caller instead of appending markup.
    pub output_as_array: bool,
    /// Indent the endnote block with tabs and newlines.
    pub pretty: bool,
    pub allowed_tags: AllowedTags,
}

impl Default for FootnoteConfig {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            icon: "&#8617;".to_string(),
            wrapper_class: "footnotes".to_string(),
            reference_class: "footnote-ref".to_string(),
            backref_class: "footnote-backref".to_string(),
            continuous: false,
            output_as_array: false,
            pretty: false,
            allowed_tags: AllowedTags::default(),
        }
    }
}

impl FootnoteConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML, mistyped values or
    /// unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

/// Case-insensitive set of tag names allowed in footnote bodies.
///
/// Built from a pipe-delimited list such as `"em|strong|a"`. Only names are
/// checked; attributes of allowed tags are kept verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct AllowedTags {
    source: String,
    names: HashSet<String>,
}

impl AllowedTags {
    /// Parse a pipe-delimited tag list. Blank entries are ignored.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let names = list
            .split('|')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_ascii_lowercase)
            .collect();
        Self {
            source: list.to_string(),
            names,
        }
    }

    /// Whether `name` may appear in a footnote body.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        self.names.contains(&name.to_ascii_lowercase())
    }

    /// The list as originally written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for AllowedTags {
    fn default() -> Self {
        Self::parse(DEFAULT_ALLOWED_TAGS)
    }
}

impl fmt::Debug for AllowedTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AllowedTags").field(&self.source).finish()
    }
}

impl<'de> Deserialize<'de> for AllowedTags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|list| Self::parse(&list))
    }
}
