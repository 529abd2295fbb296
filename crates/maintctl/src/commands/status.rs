//! Status command - one-shot snapshot of the maintenance run.

use anyhow::Result;
use chrono::DateTime;
use maint_common::{format_remaining, StatusResponse};

use crate::client::StatusClient;
use crate::display;

pub async fn execute(client: &StatusClient, json: bool) -> Result<()> {
    let status = client.status().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    render(&status);
    Ok(())
}

fn render(status: &StatusResponse) {
    println!("{}", display::bold("Maintenance Status"));
    println!("{}", "=".repeat(50));

    if status.is_complete {
        println!("{}", display::success("Maintenance complete"));
    } else {
        println!(
            "Phase {}/{}: {}",
            status.phase_index + 1,
            status.phases.len(),
            display::bold(&status.current_phase.name)
        );
    }

    println!("{}", display::progress_bar_line(status.progress, 40));
    println!(
        "Remaining: {}",
        format_remaining(status.remaining_time_seconds)
    );

    if let Some(started) = DateTime::from_timestamp_millis(status.start_time) {
        println!(
            "{}",
            display::dimmed(&format!(
                "Started: {}",
                started.format("%Y-%m-%d %H:%M:%S UTC")
            ))
        );
    }

    println!();
    for (index, phase) in status.phases.iter().enumerate() {
        let line = format!(
            "{} (to {:.0}%, {:.0}s)",
            phase.name, phase.progress, phase.duration
        );
        if status.is_complete || index < status.phase_index {
            println!("  {}", display::success(&line));
        } else if index == status.phase_index {
            println!("  {} {}", display::bold("→"), line);
        } else {
            println!("    {}", display::dimmed(&line));
        }
    }
}
