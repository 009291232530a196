pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;

pub use api::{QbitClient, TorrentFile, ValueList};
pub use config::{CliArgs, Config};
pub use error::{QbitError, QbitResult};
pub use metrics::ApiMetrics;

use anyhow::{Context, Result};
use std::sync::Arc;

/// Run one CLI command against the configured daemon and print the reply.
pub async fn run(config: Config, command: cli::Command) -> Result<()> {
    tracing::debug!(url = %config.api.url, "Configuration loaded");

    let metrics = Arc::new(ApiMetrics::new());
    let client = api::create_api_client(&config.api, Some(Arc::clone(&metrics)))
        .context("Failed to create API client")?;

    let output = cli::execute(&client, command).await?;
    match output {
        serde_json::Value::String(text) => println!("{}", text),
        other => println!("{}", serde_json::to_string_pretty(&other)?),
    }

    metrics.log_summary();
    Ok(())
}
