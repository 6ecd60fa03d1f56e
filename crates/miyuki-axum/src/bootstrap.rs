//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::{Context, Result};
use miyuki_core::{DownloadInvoker, DownloaderPort, GatewaySettings, OptionSchema};
use miyuki_runtime::ProcessDownloader;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::create_router;

/// Application context for the web adapter.
pub struct AxumContext {
    /// The validated option registry, shared read-only by all requests.
    pub schema: Arc<OptionSchema>,
    /// Invoker wrapping the configured downloader.
    pub invoker: Arc<DownloadInvoker>,
}

impl AxumContext {
    /// Assemble a context from a schema and any downloader implementation.
    pub fn new(schema: OptionSchema, downloader: Arc<dyn DownloaderPort>) -> Self {
        Self {
            schema: Arc::new(schema),
            invoker: Arc::new(DownloadInvoker::new(downloader)),
        }
    }
}

/// Build the context: validate the schema and wire the process downloader.
///
/// Fails only when the built-in option table is inconsistent, which is a
/// programming error that must stop the process before it serves anything.
pub fn bootstrap(settings: &GatewaySettings) -> Result<AxumContext> {
    let schema = OptionSchema::miyuki().context("Invalid option schema")?;

    info!(
        target: "miyuki.gateway",
        options = schema.len(),
        program = %settings.miyuki.program.display(),
        prefix_args = ?settings.miyuki.prefix_args,
        "Gateway bootstrap complete"
    );

    let downloader: Arc<dyn DownloaderPort> =
        Arc::new(ProcessDownloader::new(settings.miyuki.clone()));

    Ok(AxumContext::new(schema, downloader))
}

/// Start the web server and serve until the process is stopped.
pub async fn start_server(settings: GatewaySettings) -> Result<()> {
    let ctx = bootstrap(&settings)?;
    let app = create_router(ctx);

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(target: "miyuki.gateway", "miyuki web gateway listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
