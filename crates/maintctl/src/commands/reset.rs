//! Reset command - restart the maintenance clock.

use anyhow::Result;

use crate::client::StatusClient;
use crate::display;

pub async fn execute(client: &StatusClient) -> Result<()> {
    let response = client.reset().await?;

    println!("{}", display::success(&response.message));
    println!(
        "{}",
        display::dimmed(&format!(
            "Progress back to {:.0}%, {} phases ahead",
            response.state.progress,
            response.state.phases.len()
        ))
    );
    Ok(())
}
