//! Gateway settings.
//!
//! Plain configuration values with defaults. Adapters override them from
//! command-line arguments and environment variables.

use std::path::PathBuf;

/// Default listen address (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 9898;

/// Default downloader executable, resolved through `PATH`.
pub const DEFAULT_MIYUKI_PROGRAM: &str = "miyuki";

/// How to launch the external downloader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiyukiCommand {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments placed before the job options (e.g. `-m miyuki` for python).
    pub prefix_args: Vec<String>,
}

impl MiyukiCommand {
    /// Create a command for `program` with no prefix arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            prefix_args: Vec::new(),
        }
    }

    /// Set the arguments placed before the job options.
    #[must_use]
    pub fn with_prefix_args(mut self, args: Vec<String>) -> Self {
        self.prefix_args = args;
        self
    }
}

impl Default for MiyukiCommand {
    fn default() -> Self {
        Self::new(DEFAULT_MIYUKI_PROGRAM)
    }
}

/// Listener and downloader settings for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Downloader launch command.
    pub miyuki: MiyukiCommand,
}

impl GatewaySettings {
    /// Settings with the built-in defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            miyuki: MiyukiCommand::default(),
        }
    }

    /// Set the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the bind host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the downloader command.
    #[must_use]
    pub fn with_miyuki(mut self, miyuki: MiyukiCommand) -> Self {
        self.miyuki = miyuki;
        self
    }

    /// `host:port` string suitable for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}
