//! maintctl - CLI client for the maintenance status service.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use maintctl::cli::{Cli, Commands};
use maintctl::client::StatusClient;
use maintctl::commands;
use maintctl::display;
use maintctl::logging::LogEntry;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = StatusClient::new(cli.server.as_deref())?;

    let started = Instant::now();
    let command_name = cli.command.name();

    let result = match cli.command {
        Commands::Status { json } => commands::status::execute(&client, json).await,
        Commands::Watch { interval } => commands::watch::execute(&client, interval).await,
        Commands::Reset => commands::reset::execute(&client).await,
        Commands::Info => commands::info::execute(&client).await,
    };

    let entry = LogEntry {
        ts: LogEntry::now(),
        req_id: LogEntry::generate_req_id(),
        command: command_name.to_string(),
        duration_ms: started.elapsed().as_millis() as u64,
        ok: result.is_ok(),
        error: result.as_ref().err().map(|e| format!("{e:#}")),
    };
    let _ = entry.write();

    if let Err(e) = result {
        eprintln!("{}", display::error(&format!("{e:#}")));
        eprintln!(
            "{}",
            display::dimmed("Re-run the command once the service is reachable.")
        );
        std::process::exit(1);
    }

    Ok(())
}
