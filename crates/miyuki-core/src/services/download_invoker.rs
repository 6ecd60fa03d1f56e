//! Download invoker - runs one job through the downloader port.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::job::JobConfig;
use crate::outcome::Outcome;
use crate::ports::DownloaderPort;

/// Service that hands a [`JobConfig`] to the downloader and reports the result.
///
/// The call blocks the current thread for the full duration of the download.
/// It is made exactly once: no retry, no timeout, no background execution.
pub struct DownloadInvoker {
    downloader: Arc<dyn DownloaderPort>,
}

impl DownloadInvoker {
    /// Create a new invoker around a downloader.
    pub fn new(downloader: Arc<dyn DownloaderPort>) -> Self {
        Self { downloader }
    }

    /// Run the download and capture its outcome.
    ///
    /// Errors returned by the downloader, and panics raised inside it, both
    /// become [`Outcome::Failure`]; nothing propagates to the caller.
    pub fn invoke(&self, config: JobConfig) -> Outcome {
        // auth carries credentials, so only option names are logged
        let options = config.set_options().join(",");
        info!(target: "miyuki.invoke", %options, "Starting download");

        let started = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.downloader.execute_download(&config)
        }));
        let elapsed = started.elapsed();

        let outcome = match result {
            Ok(Ok(())) => Outcome::Success,
            Ok(Err(err)) => Outcome::failure(err.to_string()),
            Err(payload) => Outcome::failure(panic_message(payload.as_ref())),
        };

        match &outcome {
            Outcome::Success => {
                info!(target: "miyuki.invoke", ?elapsed, "Download completed");
            }
            Outcome::Failure(reason) => {
                warn!(target: "miyuki.invoke", ?elapsed, %reason, "Download failed");
            }
        }

        outcome
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned());

    match detail {
        Some(detail) => format!("downloader panicked: {detail}"),
        None => "downloader panicked".to_string(),
    }
}
