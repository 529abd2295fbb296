//! CLI - command-line argument parsing.
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use clap::{Parser, Subcommand};

/// Maintenance status service client
#[derive(Parser)]
#[command(name = "maintctl")]
#[command(about = "CLI client for the maintenance status service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Server base URL (overrides $MAINTCTL_SERVER and the default)
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current maintenance status once
    Status {
        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Poll the service and render a live progress display
    Watch {
        /// Poll interval in seconds
        #[arg(long, default_value_t = 2)]
        interval: u64,
    },

    /// Restart the maintenance clock (operational use)
    Reset,

    /// Show service info and uptime
    Info,
}

impl Commands {
    /// Command name for the invocation log.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Status { .. } => "status",
            Commands::Watch { .. } => "watch",
            Commands::Reset => "reset",
            Commands::Info => "info",
        }
    }
}
