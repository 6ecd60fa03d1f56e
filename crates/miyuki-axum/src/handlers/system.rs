//! Liveness and schema introspection.

use axum::Json;
use axum::extract::State;
use miyuki_core::OptionSpec;

use crate::state::AppState;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// The option schema in display order.
pub async fn options(State(state): State<AppState>) -> Json<Vec<OptionSpec>> {
    Json(state.schema.entries().to_vec())
}
