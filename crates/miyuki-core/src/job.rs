//! Job model: raw form submissions and the typed configuration built from them.

use serde::Serialize;

use crate::schema::OptionKind;

/// Coerced value of a single option, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Checkbox value; never absent.
    Flag(bool),
    /// Verbatim text, or absent.
    Text(Option<String>),
    /// Non-empty token list, or absent.
    TextList(Option<Vec<String>>),
}

impl OptionValue {
    /// The kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        match self {
            Self::Flag(_) => OptionKind::Flag,
            Self::Text(_) => OptionKind::Text,
            Self::TextList(_) => OptionKind::TextList,
        }
    }

    /// Whether the user actually set this option (flag on, or value present).
    #[must_use]
    pub const fn is_set(&self) -> bool {
        match self {
            Self::Flag(on) => *on,
            Self::Text(value) => value.is_some(),
            Self::TextList(tokens) => tokens.is_some(),
        }
    }
}

/// Raw `(name, value)` pairs received with one form submission.
///
/// Kept in arrival order. When a name repeats, the first value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    fields: Vec<(String, String)>,
}

impl RawSubmission {
    /// Create an empty submission.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Build a submission from decoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// First submitted value for `name`, if the key is present at all.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of received pairs, including repeats and unknown names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether nothing was submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Fully coerced configuration handed to the downloader.
///
/// One field per schema entry. Flags are plain booleans; text options are
/// absent rather than empty; list options are absent or hold at least one
/// token.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobConfig {
    /// Movie URLs.
    pub urls: Option<Vec<String>>,
    /// Username and password.
    pub auth: Option<Vec<String>>,
    /// Public playlist URL.
    pub plist: Option<String>,
    /// Download count limit.
    pub limit: Option<String>,
    /// Movie serial number.
    pub search: Option<String>,
    /// File path.
    pub file: Option<String>,
    /// HTTP(S) proxy.
    pub proxy: Option<String>,
    /// Enable ffmpeg processing.
    pub ffmpeg: bool,
    /// Download video cover.
    pub cover: bool,
    /// Set cover as preview.
    pub ffcover: bool,
    /// Hide the banner.
    pub noban: bool,
    /// Full title as file name.
    pub title: bool,
    /// Movie resolution.
    pub quality: Option<String>,
    /// Segment retry count.
    pub retry: Option<String>,
    /// Delay before retry, in seconds.
    pub delay: Option<String>,
    /// Segment download timeout, in seconds.
    pub timeout: Option<String>,
}

impl JobConfig {
    /// Field names and the option kind each one holds.
    pub const FIELDS: &'static [(&'static str, OptionKind)] = &[
        ("urls", OptionKind::TextList),
        ("auth", OptionKind::TextList),
        ("plist", OptionKind::Text),
        ("limit", OptionKind::Text),
        ("search", OptionKind::Text),
        ("file", OptionKind::Text),
        ("proxy", OptionKind::Text),
        ("ffmpeg", OptionKind::Flag),
        ("cover", OptionKind::Flag),
        ("ffcover", OptionKind::Flag),
        ("noban", OptionKind::Flag),
        ("title", OptionKind::Flag),
        ("quality", OptionKind::Text),
        ("retry", OptionKind::Text),
        ("delay", OptionKind::Text),
        ("timeout", OptionKind::Text),
    ];

    /// Kind of the field called `name`, if there is one.
    #[must_use]
    pub fn field_kind(name: &str) -> Option<OptionKind> {
        Self::FIELDS
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, kind)| *kind)
    }

    /// Store `value` into the field called `name`.
    ///
    /// Returns `false` when there is no such field or the value has the wrong
    /// kind; the configuration is left untouched in that case.
    pub(crate) fn assign(&mut self, name: &str, value: OptionValue) -> bool {
        use OptionValue::{Flag, Text, TextList};

        match (name, value) {
            ("urls", TextList(v)) => self.urls = v,
            ("auth", TextList(v)) => self.auth = v,
            ("plist", Text(v)) => self.plist = v,
            ("limit", Text(v)) => self.limit = v,
            ("search", Text(v)) => self.search = v,
            ("file", Text(v)) => self.file = v,
            ("proxy", Text(v)) => self.proxy = v,
            ("ffmpeg", Flag(v)) => self.ffmpeg = v,
            ("cover", Flag(v)) => self.cover = v,
            ("ffcover", Flag(v)) => self.ffcover = v,
            ("noban", Flag(v)) => self.noban = v,
            ("title", Flag(v)) => self.title = v,
            ("quality", Text(v)) => self.quality = v,
            ("retry", Text(v)) => self.retry = v,
            ("delay", Text(v)) => self.delay = v,
            ("timeout", Text(v)) => self.timeout = v,
            _ => return false,
        }
        true
    }

    /// Every field as a tagged value, in [`Self::FIELDS`] order.
    #[must_use]
    pub fn values(&self) -> Vec<(&'static str, OptionValue)> {
        use OptionValue::{Flag, Text, TextList};

        vec![
            ("urls", TextList(self.urls.clone())),
            ("auth", TextList(self.auth.clone())),
            ("plist", Text(self.plist.clone())),
            ("limit", Text(self.limit.clone())),
            ("search", Text(self.search.clone())),
            ("file", Text(self.file.clone())),
            ("proxy", Text(self.proxy.clone())),
            ("ffmpeg", Flag(self.ffmpeg)),
            ("cover", Flag(self.cover)),
            ("ffcover", Flag(self.ffcover)),
            ("noban", Flag(self.noban)),
            ("title", Flag(self.title)),
            ("quality", Text(self.quality.clone())),
            ("retry", Text(self.retry.clone())),
            ("delay", Text(self.delay.clone())),
            ("timeout", Text(self.timeout.clone())),
        ]
    }

    /// Names of the options the user set, in field order.
    #[must_use]
    pub fn set_options(&self) -> Vec<&'static str> {
        self.values()
            .into_iter()
            .filter(|(_, value)| value.is_set())
            .map(|(name, _)| name)
            .collect()
    }
}
