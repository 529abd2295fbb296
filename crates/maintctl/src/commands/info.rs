//! Info command - service identity and uptime.

use anyhow::Result;
use chrono::DateTime;

use crate::client::StatusClient;
use crate::display;

pub async fn execute(client: &StatusClient) -> Result<()> {
    let info = client.info().await?;

    println!("{}", display::bold(&info.message));
    println!("Uptime: {}s", info.uptime);
    if let Some(started) = DateTime::from_timestamp_millis(info.start_time) {
        println!(
            "Run started: {}",
            started.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}
