//! Option schema registry.
//!
//! The schema is the whole user-facing contract of the gateway: an ordered,
//! read-only list of named options, each with a declared kind and a help
//! text. It is built once at startup, validated against [`JobConfig`], and
//! then shared by every request without synchronization.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::job::JobConfig;

/// Declared kind of an option, which drives both coercion and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OptionKind {
    /// Checkbox semantics: presence means `true`.
    #[serde(rename = "flag")]
    Flag,
    /// Free text passed through verbatim.
    #[serde(rename = "string")]
    Text,
    /// Whitespace-separated tokens entered in a single text field.
    #[serde(rename = "list")]
    TextList,
}

impl OptionKind {
    /// Stable lowercase tag for display and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Text => "string",
            Self::TextList => "list",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named, typed, described configuration knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    /// Unique option name, also the form field name.
    pub name: &'static str,
    /// Declared kind.
    pub kind: OptionKind,
    /// Human-readable help text shown next to the control.
    pub description: &'static str,
}

impl OptionSpec {
    /// Create a new option entry.
    #[must_use]
    pub const fn new(name: &'static str, kind: OptionKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
        }
    }
}

/// Options understood by the miyuki downloader, in display order.
const MIYUKI_OPTIONS: [OptionSpec; 16] = [
    OptionSpec::new(
        "urls",
        OptionKind::TextList,
        "Movie URLs, separate multiple URLs with spaces",
    ),
    OptionSpec::new(
        "auth",
        OptionKind::TextList,
        "Username and password, separate with space",
    ),
    OptionSpec::new("plist", OptionKind::Text, "Public playlist URL"),
    OptionSpec::new("limit", OptionKind::Text, "Limit the number of downloads"),
    OptionSpec::new("search", OptionKind::Text, "Movie serial number"),
    OptionSpec::new("file", OptionKind::Text, "File path"),
    OptionSpec::new("proxy", OptionKind::Text, "HTTP(S) proxy"),
    OptionSpec::new("ffmpeg", OptionKind::Flag, "Enable ffmpeg processing"),
    OptionSpec::new("cover", OptionKind::Flag, "Download video cover"),
    OptionSpec::new(
        "ffcover",
        OptionKind::Flag,
        "Set cover as preview (ffmpeg required)",
    ),
    OptionSpec::new("noban", OptionKind::Flag, "Do not display the banner"),
    OptionSpec::new("title", OptionKind::Flag, "Full title as file name"),
    OptionSpec::new("quality", OptionKind::Text, "Specify the movie resolution"),
    OptionSpec::new(
        "retry",
        OptionKind::Text,
        "Number of retries for downloading segments",
    ),
    OptionSpec::new("delay", OptionKind::Text, "Delay in seconds before retry"),
    OptionSpec::new(
        "timeout",
        OptionKind::Text,
        "Timeout in seconds for segment download",
    ),
];

/// Registry construction errors.
///
/// These are programmer errors in the option table and are reported once,
/// at startup, before the listener is bound.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// An entry has an empty name.
    #[error("Option at position {index} has an empty name")]
    EmptyName {
        /// Position of the offending entry.
        index: usize,
    },

    /// Two entries share a name.
    #[error("Duplicate option name: {name}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// An entry has no matching job configuration field.
    #[error("Option '{name}' has no job configuration field")]
    UnknownOption {
        /// The unmatched option name.
        name: String,
    },

    /// An entry's kind disagrees with the type of its job field.
    #[error("Option '{name}' is declared as {declared} but its job field is {expected}")]
    KindMismatch {
        /// The option name.
        name: String,
        /// Kind declared in the schema.
        declared: OptionKind,
        /// Kind required by the job field.
        expected: OptionKind,
    },

    /// A job configuration field has no schema entry.
    #[error("Job configuration field '{name}' has no option entry")]
    MissingOption {
        /// The uncovered field name.
        name: String,
    },
}

/// Ordered, immutable collection of [`OptionSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSchema {
    entries: Vec<OptionSpec>,
}

impl OptionSchema {
    /// Build a schema from entries, validating it against [`JobConfig`].
    ///
    /// Every entry must map to exactly one job field of the same kind, and
    /// every job field must be covered by exactly one entry.
    pub fn new(entries: Vec<OptionSpec>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(entries.len());

        for (index, spec) in entries.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(SchemaError::EmptyName { index });
            }
            if !seen.insert(spec.name) {
                return Err(SchemaError::DuplicateName {
                    name: spec.name.to_string(),
                });
            }

            let Some(expected) = JobConfig::field_kind(spec.name) else {
                return Err(SchemaError::UnknownOption {
                    name: spec.name.to_string(),
                });
            };
            if expected != spec.kind {
                return Err(SchemaError::KindMismatch {
                    name: spec.name.to_string(),
                    declared: spec.kind,
                    expected,
                });
            }
        }

        if let Some((name, _)) = JobConfig::FIELDS
            .iter()
            .find(|(name, _)| !seen.contains(name))
        {
            return Err(SchemaError::MissingOption {
                name: (*name).to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// The fixed registry of options understood by the miyuki downloader.
    pub fn miyuki() -> Result<Self, SchemaError> {
        Self::new(MIYUKI_OPTIONS.to_vec())
    }

    /// All entries in schema order.
    #[must_use]
    pub fn entries(&self) -> &[OptionSpec] {
        &self.entries
    }

    /// Iterate entries in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.entries.iter()
    }

    /// Look up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.entries.iter().find(|spec| spec.name == name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a OptionSchema {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
