//! Watch command - live polling display.
//!
//! Fixed-interval poll, default 2 seconds. Every tick replaces the rendered
//! state wholesale with the newest snapshot; a failed poll shows an error
//! line and the next tick is the retry. A slow reply that lands after a
//! newer one simply gets overwritten (last-writer-wins).

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use maint_common::format_remaining;
use tokio::time::{interval, MissedTickBehavior};

use crate::client::StatusClient;
use crate::display;

pub async fn execute(client: &StatusClient, interval_secs: u64) -> Result<()> {
    let bar = ProgressBar::new(100);
    bar.set_style(ProgressStyle::with_template(
        "{msg}\n{wide_bar:.cyan/blue} {pos:>3}%",
    )?);
    // Loading state until the first response arrives.
    bar.set_message(display::dimmed(&format!(
        "Contacting {} ...",
        client.base_url()
    )));

    let interval_secs = interval_secs.max(1);
    let mut ticker = interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // First tick fires immediately: poll on mount, then every interval.
        ticker.tick().await;

        match client.status().await {
            Ok(status) => {
                bar.set_position(status.progress.round() as u64);
                if status.is_complete {
                    bar.finish_with_message(display::success("Maintenance complete"));
                    return Ok(());
                }
                bar.set_message(format!(
                    "{} · {} remaining",
                    display::bold(&status.current_phase.name),
                    format_remaining(status.remaining_time_seconds)
                ));
            }
            Err(e) => {
                bar.set_message(display::error(&format!(
                    "{e:#} (retrying in {interval_secs}s)"
                )));
            }
        }
    }
}
