//! # miyuki-core
//!
//! Domain types and port definitions for the miyuki web gateway.
//!
//! The gateway exposes a fixed set of typed download options through an HTML
//! form, coerces submitted values into a [`JobConfig`], and hands that
//! configuration to an external downloader through the [`DownloaderPort`].
//!
//! - `schema` - the option registry ([`OptionSchema`], [`OptionSpec`], [`OptionKind`])
//! - `job` - raw submissions and the typed job configuration
//! - `coerce` - the total request coercer
//! - `outcome` - the success/failure report of one invocation
//! - `ports` - trait abstractions for external systems
//! - `services` - orchestration ([`DownloadInvoker`])
//! - `settings` - gateway listener and command defaults
//!
//! This crate has no HTTP, process, or filesystem dependencies.
#![deny(unused_crate_dependencies)]

pub mod coerce;
pub mod job;
pub mod outcome;
pub mod ports;
pub mod schema;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use coerce::coerce;
pub use job::{JobConfig, OptionValue, RawSubmission};
pub use outcome::{FAILURE_PREFIX, Outcome, SUCCESS_MESSAGE};
pub use ports::{DownloadError, DownloadResult, DownloaderPort};
pub use schema::{OptionKind, OptionSchema, OptionSpec, SchemaError};
pub use services::DownloadInvoker;
pub use settings::{
    DEFAULT_HOST, DEFAULT_MIYUKI_PROGRAM, DEFAULT_PORT, GatewaySettings, MiyukiCommand,
};
