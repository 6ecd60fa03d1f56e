//! HTTP request handlers for the gateway.
//!
//! Handlers are thin wrappers: decode, delegate to core, render.

pub mod form;
pub mod submit;
pub mod system;
