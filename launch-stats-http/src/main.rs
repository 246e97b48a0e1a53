use anyhow::Context;
use launch_stats_http::{init_logs, run, Settings};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_logs();
    let settings = Settings::new().context("failed to parse config")?;
    run(settings)?.await?;
    Ok(())
}
