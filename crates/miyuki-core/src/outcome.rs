//! Outcome of one download invocation.

use std::fmt;

/// Text reported when the downloader returns normally.
pub const SUCCESS_MESSAGE: &str = "Download completed successfully.";

/// Prefix placed before the underlying error description on failure.
pub const FAILURE_PREFIX: &str = "Failed to run miyuki command";

/// Result of a single download invocation, consumed by the result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The downloader returned normally.
    Success,
    /// The downloader failed; holds the underlying error description.
    Failure(String),
}

impl Outcome {
    /// Create a failure outcome.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure(reason.into())
    }

    /// Whether the download succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Human-readable report shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Success => SUCCESS_MESSAGE.to_string(),
            Self::Failure(reason) => format!("{FAILURE_PREFIX}: {reason}"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
