//! Subcommands of the `qbit-client` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::Value;

use crate::api::encode::TorrentFile;
use crate::api::types::{TorrentAddParameters, TorrentFilter, TorrentInfoParameters};
use crate::api::QbitClient;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the daemon and WebUI API versions
    Version,
    /// List torrents
    List {
        #[arg(long)]
        filter: Option<TorrentFilter>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Add torrents from URLs/magnet links and/or .torrent files
    Add {
        urls: Vec<String>,
        #[arg(long = "file")]
        files: Vec<PathBuf>,
        #[arg(long)]
        savepath: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        #[arg(long)]
        paused: bool,
    },
    /// Pause torrents ("all" for every torrent)
    Pause {
        #[arg(required = true)]
        hashes: Vec<String>,
    },
    /// Resume torrents ("all" for every torrent)
    Resume {
        #[arg(required = true)]
        hashes: Vec<String>,
    },
    /// Remove torrents
    Delete {
        #[arg(required = true)]
        hashes: Vec<String>,
        #[arg(long)]
        delete_files: bool,
    },
    /// List categories
    Categories,
    /// Global transfer statistics
    Transfer,
    /// Run a search and print its status
    Search {
        pattern: String,
        #[arg(long, default_value = "all")]
        plugins: String,
        #[arg(long, default_value = "all")]
        category: String,
    },
}

/// Run one subcommand and return what should be printed.
pub async fn execute(client: &QbitClient, command: Command) -> Result<Value> {
    match command {
        Command::Version => {
            let app = client.app();
            let version = app.version().await.context("Failed to get version")?;
            let webapi = app
                .webapi_version()
                .await
                .context("Failed to get WebUI API version")?;
            Ok(serde_json::json!({ "version": version, "webapi": webapi }))
        }
        Command::List {
            filter,
            category,
            tag,
        } => {
            let query = TorrentInfoParameters {
                filter,
                category,
                tag,
                ..Default::default()
            };
            let torrents = client
                .torrents()
                .info(&query)
                .await
                .context("Failed to list torrents")?;
            Ok(serde_json::to_value(torrents)?)
        }
        Command::Add {
            urls,
            files,
            savepath,
            category,
            tags,
            paused,
        } => {
            let torrents = futures::future::try_join_all(files.iter().map(TorrentFile::from_path))
                .await
                .context("Failed to read torrent file")?;
            let params = TorrentAddParameters {
                urls: (!urls.is_empty()).then(|| urls.into()),
                torrents,
                savepath,
                category,
                tags: (!tags.is_empty()).then(|| tags.into()),
                paused: paused.then_some(true),
                ..Default::default()
            };
            client
                .torrents()
                .add(params)
                .await
                .context("Failed to add torrent")
        }
        Command::Pause { hashes } => {
            client
                .torrents()
                .pause(hashes)
                .await
                .context("Failed to pause torrents")?;
            Ok(Value::String("Ok.".to_string()))
        }
        Command::Resume { hashes } => {
            client
                .torrents()
                .resume(hashes)
                .await
                .context("Failed to resume torrents")?;
            Ok(Value::String("Ok.".to_string()))
        }
        Command::Delete {
            hashes,
            delete_files,
        } => {
            client
                .torrents()
                .delete(hashes, delete_files)
                .await
                .context("Failed to delete torrents")?;
            Ok(Value::String("Ok.".to_string()))
        }
        Command::Categories => {
            let categories = client
                .torrents()
                .categories()
                .await
                .context("Failed to list categories")?;
            Ok(serde_json::to_value(categories)?)
        }
        Command::Transfer => {
            let info = client
                .transfer()
                .info()
                .await
                .context("Failed to get transfer info")?;
            Ok(serde_json::to_value(info)?)
        }
        Command::Search {
            pattern,
            plugins,
            category,
        } => {
            let search = client.search();
            let id = search
                .start(&pattern, plugins, category)
                .await
                .context("Failed to start search")?;
            let status = search
                .status(id)
                .await
                .context("Failed to get search status")?;
            Ok(serde_json::json!({ "id": id, "status": status }))
        }
    }
}
