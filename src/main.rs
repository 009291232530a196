use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use qbit_client::cli::Command;
use qbit_client::{CliArgs, Config};

#[derive(Parser)]
#[command(name = "qbit-client")]
#[command(about = "Command-line client for the qBittorrent WebUI API")]
struct Cli {
    #[arg(short, long, help = "Config file (toml or json)")]
    config: Option<PathBuf>,

    #[arg(long, env = "QBIT_CLIENT_URL", help = "WebUI base URL")]
    url: Option<String>,

    #[arg(short, long)]
    username: Option<String>,

    #[arg(short, long)]
    password: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    timeout: Option<u64>,

    #[arg(short, long, help = "Increase verbosity")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        api_url: cli.url,
        config_file: cli.config,
        username: cli.username,
        password: cli.password,
        timeout_secs: cli.timeout,
        verbose: cli.verbose,
    };
    let config = Config::load_with_cli(&args).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let level = config
        .logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    qbit_client::run(config, cli.command).await
}
