//! # miyuki-axum
//!
//! Axum web adapter for the miyuki gateway.
//!
//! Serves the option form at `GET /`, accepts submissions at `POST /submit`,
//! and renders the download outcome. The download itself runs synchronously
//! for the duration of the request.
//!
//! - `bootstrap` - composition root: schema, downloader, invoker, listener
//! - `routes` - router construction
//! - `handlers` - thin request handlers
//! - `views` - HTML rendering of the form and result pages
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

// Re-export primary types
pub use bootstrap::{AxumContext, bootstrap, start_server};
pub use routes::create_router;
pub use state::AppState;
