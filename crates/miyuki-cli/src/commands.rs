//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use miyuki_core::{
    DEFAULT_HOST, DEFAULT_MIYUKI_PROGRAM, DEFAULT_PORT, GatewaySettings, MiyukiCommand,
};

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web gateway
    Serve(ServeArgs),
    /// List the download options the form exposes
    Options,
}

/// Listener and downloader settings for `serve`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "MIYUKI_WEB_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to serve the form on
    #[arg(short, long, env = "MIYUKI_WEB_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// miyuki executable to run for each submission
    #[arg(long = "miyuki-bin", env = "MIYUKI_BIN", default_value = DEFAULT_MIYUKI_PROGRAM)]
    pub miyuki_bin: PathBuf,

    /// Argument placed before the job options (repeatable, e.g. `--miyuki-arg -m --miyuki-arg miyuki`)
    #[arg(long = "miyuki-arg", allow_hyphen_values = true)]
    pub miyuki_args: Vec<String>,
}

impl ServeArgs {
    /// Convert parsed arguments into gateway settings.
    pub fn into_settings(self) -> GatewaySettings {
        GatewaySettings::with_defaults()
            .with_host(self.host)
            .with_port(self.port)
            .with_miyuki(MiyukiCommand::new(self.miyuki_bin).with_prefix_args(self.miyuki_args))
    }
}
