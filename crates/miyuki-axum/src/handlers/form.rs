//! Form page handler.

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;
use crate::views;

/// Serve the option form. Always a fresh page; nothing is remembered between requests.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(views::render_form(&state.schema))
}
