//! Submission handler - coerce, invoke, report.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use miyuki_core::{Outcome, RawSubmission, coerce};
use tracing::{debug, error};

use crate::state::AppState;
use crate::views;

/// Run one download for the submitted form and render the outcome.
///
/// Always answers 200: a failed download is reported in the page body. The
/// body is read as raw bytes so that a missing or wrong content type, or a
/// malformed encoding, still produces a (possibly empty) submission.
pub async fn submit(State(state): State<AppState>, body: Bytes) -> Html<String> {
    let raw = parse_form_body(&body);
    debug!(target: "miyuki.gateway", fields = raw.len(), "Form submitted");

    let config = coerce(&state.schema, &raw);

    // The downloader blocks; keep it off the async workers but wait for it
    let invoker = Arc::clone(&state.invoker);
    let outcome = match tokio::task::spawn_blocking(move || invoker.invoke(config)).await {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(target: "miyuki.gateway", error = %err, "Download task did not complete");
            Outcome::failure(format!("download task aborted: {err}"))
        }
    };

    Html(views::render_result(&outcome))
}

/// Decode an `application/x-www-form-urlencoded` body.
///
/// Never fails: bad percent escapes are kept literally and invalid UTF-8 is
/// replaced.
pub fn parse_form_body(body: &[u8]) -> RawSubmission {
    url::form_urlencoded::parse(body).into_owned().collect()
}
