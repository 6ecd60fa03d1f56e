//! External downloader port.
//!
//! The downloader is the out-of-scope routine that actually fetches and
//! processes media. The gateway reaches it through one synchronous call per
//! submission and never retries it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::job::JobConfig;

/// Error raised when a download job cannot be completed.
///
/// Serializable and free of `std::io::Error` so it can cross adapter
/// boundaries unchanged; I/O failures are captured as kind and message.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum DownloadError {
    /// I/O error while launching or talking to the downloader.
    #[error("I/O error ({kind}): {message}")]
    Io {
        /// The kind of I/O error (e.g., "`PermissionDenied`").
        kind: String,
        /// Detailed error message.
        message: String,
    },

    /// The downloader is not installed or cannot be located.
    #[error("Downloader unavailable: {message}")]
    Unavailable {
        /// Detailed error message.
        message: String,
    },

    /// The downloader ran and reported failure.
    #[error("{message}")]
    ProcessFailed {
        /// Exit code, if the process exited normally.
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<i32>,
        /// Last diagnostic line the downloader printed.
        message: String,
    },

    /// General/uncategorized error.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl DownloadError {
    /// Create an I/O error from kind and message strings.
    pub fn io(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error from a `std::io::Error`.
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Io {
            kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }

    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a process failure error.
    pub fn process_failed(code: Option<i32>, message: impl Into<String>) -> Self {
        Self::ProcessFailed {
            code,
            message: message.into(),
        }
    }

    /// Create a generic error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Convenience result type for downloader operations.
pub type DownloadResult<T> = Result<T, DownloadError>;

/// Synchronous entry point of the external downloader.
///
/// Implementations block until the job finishes or fails. Timeouts, retries
/// and segment handling are the implementation's own business.
#[cfg_attr(test, mockall::automock)]
pub trait DownloaderPort: Send + Sync {
    /// Run one download job described by `config`.
    fn execute_download(&self, config: &JobConfig) -> DownloadResult<()>;
}
