//! Command handlers.
//!
//! Handlers are thin wrappers that convert CLI input, call into the
//! core/adapter crates, and format terminal output.

pub mod options;
pub mod serve;
