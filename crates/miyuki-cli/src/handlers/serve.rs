//! Serve command handler.

use anyhow::Result;
use tracing::info;

use crate::commands::ServeArgs;

/// Start the gateway and block until it stops.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let settings = args.into_settings();

    info!(
        target: "miyuki.gateway",
        addr = %settings.bind_addr(),
        miyuki = %settings.miyuki.program.display(),
        "Starting miyuki web gateway"
    );

    miyuki_axum::start_server(settings).await
}
