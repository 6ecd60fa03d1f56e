//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Create the gateway router.
///
/// - `GET /` - option form
/// - `POST /submit` - run a download, render its outcome
/// - `GET /health` - liveness
/// - `GET /api/options` - the option schema as JSON
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::form::index))
        .route("/submit", post(handlers::submit::submit))
        .route("/health", get(handlers::system::health))
        .route("/api/options", get(handlers::system::options))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
