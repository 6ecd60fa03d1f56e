//! # miyuki-runtime
//!
//! Infrastructure adapter for the external miyuki downloader.
//!
//! - `command` - maps a [`JobConfig`](miyuki_core::JobConfig) onto miyuki's
//!   command-line options
//! - `process` - [`ProcessDownloader`], the [`DownloaderPort`](miyuki_core::DownloaderPort)
//!   implementation that runs the command and waits for it
#![deny(unused_crate_dependencies)]

pub mod command;
pub mod process;

pub use command::build_args;
pub use process::ProcessDownloader;

#[cfg(test)]
use tempfile as _;
