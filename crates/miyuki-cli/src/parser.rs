//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Web front end for the miyuki downloader.
///
/// With no subcommand, prints this help and exits. Use `serve` to start
/// the gateway.
#[derive(Parser)]
#[command(name = "miyuki-web")]
#[command(about = "Web form gateway for the miyuki downloader")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
