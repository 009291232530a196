use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::encode::{encode_add, encode_info_query, Params, Separator, ValueList};
use crate::api::session::{RequestOptions, Session};
use crate::api::types::*;
use crate::error::QbitResult;
use crate::metrics::ApiMetrics;

/// Client for the qBittorrent WebUI API.
///
/// Cloning is cheap and clones share one session. Endpoints are grouped the
/// way the remote API groups them: `client.torrents().pause(..)` maps to
/// `POST /api/v2/torrents/pause`.
#[derive(Debug, Clone)]
pub struct QbitClient {
    session: Arc<Session>,
}

impl QbitClient {
    /// Create a client without credentials (for daemons with auth bypass).
    pub fn new(base_url: &str) -> QbitResult<Self> {
        Self::with_config(base_url, String::new(), String::new(), None, None)
    }

    /// Create a client that logs in with the given credentials on first use.
    pub fn with_auth(base_url: &str, username: &str, password: &str) -> QbitResult<Self> {
        Self::with_config(
            base_url,
            username.to_string(),
            password.to_string(),
            None,
            None,
        )
    }

    pub fn with_config(
        base_url: &str,
        username: String,
        password: String,
        timeout: Option<Duration>,
        metrics: Option<Arc<ApiMetrics>>,
    ) -> QbitResult<Self> {
        let session = Session::new(base_url, username, password, timeout, metrics)?;
        Ok(Self {
            session: Arc::new(session),
        })
    }

    /// Shared request core, for calling methods not wrapped here.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        self.session.base_url()
    }

    pub async fn session_token(&self) -> Option<String> {
        self.session.token().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.token().await.is_some()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi {
            session: &self.session,
        }
    }

    pub fn app(&self) -> AppApi<'_> {
        AppApi {
            session: &self.session,
        }
    }

    pub fn log(&self) -> LogApi<'_> {
        LogApi {
            session: &self.session,
        }
    }

    pub fn sync(&self) -> SyncApi<'_> {
        SyncApi {
            session: &self.session,
        }
    }

    pub fn transfer(&self) -> TransferApi<'_> {
        TransferApi {
            session: &self.session,
        }
    }

    pub fn torrents(&self) -> TorrentsApi<'_> {
        TorrentsApi {
            session: &self.session,
        }
    }

    pub fn search(&self) -> SearchApi<'_> {
        SearchApi {
            session: &self.session,
        }
    }
}

/// Helper function to create a QbitClient from configuration
pub fn create_api_client(
    api_config: &crate::config::ApiConfig,
    metrics: Option<Arc<ApiMetrics>>,
) -> QbitResult<QbitClient> {
    QbitClient::with_config(
        &api_config.url,
        api_config.username.clone().unwrap_or_default(),
        api_config.password.clone().unwrap_or_default(),
        api_config.timeout_secs.map(Duration::from_secs),
        metrics,
    )
}

// =========================================================================
// Auth
// =========================================================================

#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    session: &'a Session,
}

impl AuthApi<'_> {
    /// Log in with the configured credentials. The daemon answers `Ok.` or
    /// `Fails.` with status 200 either way; only the cookie tells them apart.
    pub async fn login(&self) -> QbitResult<Value> {
        self.session.login().await
    }

    /// Log in with other credentials than the configured ones.
    pub async fn login_with(&self, username: &str, password: &str) -> QbitResult<Value> {
        self.session.login_with(username, password).await
    }

    pub async fn logout(&self) -> QbitResult<Value> {
        self.session.logout().await
    }
}

// =========================================================================
// Application
// =========================================================================

#[derive(Debug, Clone, Copy)]
pub struct AppApi<'a> {
    session: &'a Session,
}

impl AppApi<'_> {
    pub async fn version(&self) -> QbitResult<Value> {
        self.call("/app/version").await
    }

    pub async fn webapi_version(&self) -> QbitResult<Value> {
        self.call("/app/webapiVersion").await
    }

    pub async fn build_info(&self) -> QbitResult<BuildInfo> {
        self.session.invoke_json("/app/buildInfo", Params::new()).await
    }

    pub async fn shutdown(&self) -> QbitResult<()> {
        self.session.invoke_unit("/app/shutdown", Params::new()).await
    }

    pub async fn preferences(&self) -> QbitResult<Value> {
        self.call("/app/preferences").await
    }

    /// Apply a partial preferences object, sent as a JSON string in `json`.
    pub async fn set_preferences(&self, prefs: &Value) -> QbitResult<()> {
        let params = Params::new().text("json", prefs);
        self.session.invoke_unit("/app/setPreferences", params).await
    }

    pub async fn default_save_path(&self) -> QbitResult<Value> {
        self.call("/app/defaultSavePath").await
    }

    async fn call(&self, method: &str) -> QbitResult<Value> {
        self.session
            .invoke(method, Params::new(), RequestOptions::default())
            .await
    }
}

// =========================================================================
// Log
// =========================================================================

/// Filter for `log/main`. Unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub normal: Option<bool>,
    pub info: Option<bool>,
    pub warning: Option<bool>,
    pub critical: Option<bool>,
    pub last_known_id: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
pub struct LogApi<'a> {
    session: &'a Session,
}

impl LogApi<'_> {
    pub async fn main(&self, filter: &LogFilter) -> QbitResult<Value> {
        let params = Params::new()
            .opt("normal", filter.normal)
            .opt("info", filter.info)
            .opt("warning", filter.warning)
            .opt("critical", filter.critical)
            .opt("last_known_id", filter.last_known_id);
        self.session
            .invoke("/log/main", params, RequestOptions::default())
            .await
    }

    /// Peer log entries after `last_known_id`; `None` means from the start (-1).
    pub async fn peers(&self, last_known_id: Option<i64>) -> QbitResult<Value> {
        let params = Params::new().text("last_known_id", last_known_id.unwrap_or(-1));
        self.session
            .invoke("/log/peers", params, RequestOptions::default())
            .await
    }
}

// =========================================================================
// Sync
// =========================================================================

#[derive(Debug, Clone, Copy)]
pub struct SyncApi<'a> {
    session: &'a Session,
}

impl SyncApi<'_> {
    /// Changes since response id `rid`; 0 asks for a full snapshot.
    pub async fn maindata(&self, rid: u64) -> QbitResult<Value> {
        let params = Params::new().text("rid", rid);
        self.session
            .invoke("/sync/maindata", params, RequestOptions::default())
            .await
    }

    pub async fn torrent_peers(&self, hash: &str, rid: u64) -> QbitResult<Value> {
        let params = Params::new().text("hash", hash).text("rid", rid);
        self.session
            .invoke("/sync/torrentPeers", params, RequestOptions::default())
            .await
    }
}

// =========================================================================
// Transfer
// =========================================================================

#[derive(Debug, Clone, Copy)]
pub struct TransferApi<'a> {
    session: &'a Session,
}

impl TransferApi<'_> {
    pub async fn info(&self) -> QbitResult<TransferInfo> {
        self.session.invoke_json("/transfer/info", Params::new()).await
    }

    pub async fn speed_limits_mode(&self) -> QbitResult<Value> {
        self.call("/transfer/speedLimitsMode", Params::new()).await
    }

    pub async fn toggle_speed_limits_mode(&self) -> QbitResult<()> {
        self.session
            .invoke_unit("/transfer/toggleSpeedLimitsMode", Params::new())
            .await
    }

    pub async fn download_limit(&self) -> QbitResult<Value> {
        self.call("/transfer/downloadLimit", Params::new()).await
    }

    pub async fn set_download_limit(&self, limit: i64) -> QbitResult<()> {
        let params = Params::new().text("limit", limit);
        self.session
            .invoke_unit("/transfer/setDownloadLimit", params)
            .await
    }

    pub async fn upload_limit(&self) -> QbitResult<Value> {
        self.call("/transfer/uploadLimit", Params::new()).await
    }

    pub async fn set_upload_limit(&self, limit: i64) -> QbitResult<()> {
        let params = Params::new().text("limit", limit);
        self.session
            .invoke_unit("/transfer/setUploadLimit", params)
            .await
    }

    /// Ban peers given as `host:port`.
    pub async fn ban_peers(&self, peers: impl Into<ValueList>) -> QbitResult<()> {
        let params = Params::new().list("peers", peers, Separator::Pipe);
        self.session.invoke_unit("/transfer/banPeers", params).await
    }

    async fn call(&self, method: &str, params: Params) -> QbitResult<Value> {
        self.session
            .invoke(method, params, RequestOptions::default())
            .await
    }
}

// =========================================================================
// Torrents
// =========================================================================

#[derive(Debug, Clone, Copy)]
pub struct TorrentsApi<'a> {
    session: &'a Session,
}

impl TorrentsApi<'_> {
    /// List torrents matching `query`.
    #[instrument(skip(self, query), fields(api_op = "torrents_info"))]
    pub async fn info(&self, query: &TorrentInfoParameters) -> QbitResult<Vec<TorrentInfo>> {
        let torrents: Vec<TorrentInfo> = self
            .session
            .invoke_json("/torrents/info", encode_info_query(query))
            .await?;
        debug!(count = torrents.len(), "Listed torrents");
        Ok(torrents)
    }

    pub async fn properties(&self, hash: &str) -> QbitResult<TorrentProperties> {
        self.session
            .invoke_json("/torrents/properties", Params::new().text("hash", hash))
            .await
    }

    pub async fn trackers(&self, hash: &str) -> QbitResult<Vec<Tracker>> {
        self.session
            .invoke_json("/torrents/trackers", Params::new().text("hash", hash))
            .await
    }

    pub async fn webseeds(&self, hash: &str) -> QbitResult<Vec<WebSeed>> {
        self.session
            .invoke_json("/torrents/webseeds", Params::new().text("hash", hash))
            .await
    }

    /// File list of a torrent, optionally restricted to some file indexes.
    pub async fn files(
        &self,
        hash: &str,
        indexes: Option<ValueList>,
    ) -> QbitResult<Vec<TorrentContent>> {
        let mut params = Params::new().text("hash", hash);
        if let Some(indexes) = indexes {
            params = params.list("indexes", indexes, Separator::Pipe);
        }
        self.session.invoke_json("/torrents/files", params).await
    }

    pub async fn piece_states(&self, hash: &str) -> QbitResult<Vec<u8>> {
        self.session
            .invoke_json("/torrents/pieceStates", Params::new().text("hash", hash))
            .await
    }

    pub async fn piece_hashes(&self, hash: &str) -> QbitResult<Vec<String>> {
        self.session
            .invoke_json("/torrents/pieceHashes", Params::new().text("hash", hash))
            .await
    }

    pub async fn pause(&self, hashes: impl Into<ValueList>) -> QbitResult<()> {
        self.hashes_action("/torrents/pause", hashes).await
    }

    pub async fn resume(&self, hashes: impl Into<ValueList>) -> QbitResult<()> {
        self.hashes_action("/torrents/resume", hashes).await
    }

    pub async fn delete(&self, hashes: impl Into<ValueList>, delete_files: bool) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .text("deleteFiles", delete_files);
        self.session.invoke_unit("/torrents/delete", params).await
    }

    pub async fn recheck(&self, hashes: impl Into<ValueList>) -> QbitResult<()> {
        self.hashes_action("/torrents/recheck", hashes).await
    }

    pub async fn reannounce(&self, hashes: impl Into<ValueList>) -> QbitResult<()> {
        self.hashes_action("/torrents/reannounce", hashes).await
    }

    /// Add trackers to a torrent, one URL per line.
    pub async fn add_trackers(&self, hash: &str, urls: impl Into<ValueList>) -> QbitResult<()> {
        let params = Params::new()
            .text("hash", hash)
            .list("urls", urls, Separator::Newline);
        self.session.invoke_unit("/torrents/addTrackers", params).await
    }

    pub async fn edit_tracker(&self, hash: &str, orig_url: &str, new_url: &str) -> QbitResult<()> {
        let params = Params::new()
            .text("hash", hash)
            .text("origUrl", orig_url)
            .text("newUrl", new_url);
        self.session.invoke_unit("/torrents/editTracker", params).await
    }

    pub async fn remove_trackers(&self, hash: &str, urls: impl Into<ValueList>) -> QbitResult<()> {
        let params = Params::new()
            .text("hash", hash)
            .list("urls", urls, Separator::Pipe);
        self.session
            .invoke_unit("/torrents/removeTrackers", params)
            .await
    }

    pub async fn add_peers(
        &self,
        hashes: impl Into<ValueList>,
        peers: impl Into<ValueList>,
    ) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .list("peers", peers, Separator::Pipe);
        self.session.invoke_unit("/torrents/addPeers", params).await
    }

    pub async fn increase_prio(&self, hashes: impl Into<ValueList>) -> QbitResult<()> {
        self.hashes_action("/torrents/increasePrio", hashes).await
    }

    pub async fn decrease_prio(&self, hashes: impl Into<ValueList>) -> QbitResult<()> {
        self.hashes_action("/torrents/decreasePrio", hashes).await
    }

    pub async fn top_prio(&self, hashes: impl Into<ValueList>) -> QbitResult<()> {
        self.hashes_action("/torrents/topPrio", hashes).await
    }

    pub async fn bottom_prio(&self, hashes: impl Into<ValueList>) -> QbitResult<()> {
        self.hashes_action("/torrents/bottomPrio", hashes).await
    }

    /// Set the priority of files `ids` (0 = skip, 1 = normal, 6 = high, 7 = max).
    pub async fn file_prio(
        &self,
        hash: &str,
        ids: impl Into<ValueList>,
        priority: i64,
    ) -> QbitResult<()> {
        let params = Params::new()
            .text("hash", hash)
            .list("id", ids, Separator::Pipe)
            .text("priority", priority);
        self.session.invoke_unit("/torrents/filePrio", params).await
    }

    /// Per-torrent download limits, keyed by hash.
    pub async fn download_limit(&self, hashes: impl Into<ValueList>) -> QbitResult<Value> {
        let params = Params::new().list("hashes", hashes, Separator::Pipe);
        self.session
            .invoke("/torrents/downloadLimit", params, RequestOptions::default())
            .await
    }

    pub async fn set_download_limit(
        &self,
        hashes: impl Into<ValueList>,
        limit: i64,
    ) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .text("limit", limit);
        self.session
            .invoke_unit("/torrents/setDownloadLimit", params)
            .await
    }

    /// Set share limits; `None` sends -1 (no limit).
    pub async fn set_share_limits(
        &self,
        hashes: impl Into<ValueList>,
        ratio_limit: Option<f64>,
        seeding_time_limit: Option<i64>,
    ) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .text("ratioLimit", ratio_limit.unwrap_or(-1.0))
            .text("seedingTimeLimit", seeding_time_limit.unwrap_or(-1));
        self.session
            .invoke_unit("/torrents/setShareLimits", params)
            .await
    }

    /// Per-torrent upload limits, keyed by hash.
    pub async fn upload_limit(&self, hashes: impl Into<ValueList>) -> QbitResult<Value> {
        let params = Params::new().list("hashes", hashes, Separator::Pipe);
        self.session
            .invoke("/torrents/uploadLimit", params, RequestOptions::default())
            .await
    }

    pub async fn set_upload_limit(
        &self,
        hashes: impl Into<ValueList>,
        limit: i64,
    ) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .text("limit", limit);
        self.session
            .invoke_unit("/torrents/setUploadLimit", params)
            .await
    }

    pub async fn set_location(&self, hashes: impl Into<ValueList>, location: &str) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .text("location", location);
        self.session.invoke_unit("/torrents/setLocation", params).await
    }

    pub async fn rename(&self, hash: &str, name: &str) -> QbitResult<()> {
        let params = Params::new().text("hash", hash).text("name", name);
        self.session.invoke_unit("/torrents/rename", params).await
    }

    pub async fn set_category(&self, hashes: impl Into<ValueList>, category: &str) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .text("category", category);
        self.session.invoke_unit("/torrents/setCategory", params).await
    }

    pub async fn categories(&self) -> QbitResult<Categories> {
        self.session
            .invoke_json("/torrents/categories", Params::new())
            .await
    }

    pub async fn create_category(&self, category: &str, save_path: &str) -> QbitResult<()> {
        let params = Params::new()
            .text("category", category)
            .text("savePath", save_path);
        self.session
            .invoke_unit("/torrents/createCategory", params)
            .await
    }

    pub async fn edit_category(&self, category: &str, save_path: &str) -> QbitResult<()> {
        let params = Params::new()
            .text("category", category)
            .text("savePath", save_path);
        self.session.invoke_unit("/torrents/editCategory", params).await
    }

    pub async fn remove_categories(&self, categories: impl Into<ValueList>) -> QbitResult<()> {
        let params = Params::new().list("categories", categories, Separator::Newline);
        self.session
            .invoke_unit("/torrents/removeCategories", params)
            .await
    }

    pub async fn add_tags(
        &self,
        hashes: impl Into<ValueList>,
        tags: impl Into<ValueList>,
    ) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .list("tags", tags, Separator::Comma);
        self.session.invoke_unit("/torrents/addTags", params).await
    }

    pub async fn remove_tags(
        &self,
        hashes: impl Into<ValueList>,
        tags: impl Into<ValueList>,
    ) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .list("tags", tags, Separator::Comma);
        self.session.invoke_unit("/torrents/removeTags", params).await
    }

    pub async fn tags(&self) -> QbitResult<Vec<String>> {
        self.session.invoke_json("/torrents/tags", Params::new()).await
    }

    pub async fn create_tags(&self, tags: impl Into<ValueList>) -> QbitResult<()> {
        let params = Params::new().list("tags", tags, Separator::Comma);
        self.session.invoke_unit("/torrents/createTags", params).await
    }

    pub async fn delete_tags(&self, tags: impl Into<ValueList>) -> QbitResult<()> {
        let params = Params::new().list("tags", tags, Separator::Comma);
        self.session.invoke_unit("/torrents/deleteTags", params).await
    }

    pub async fn set_auto_management(
        &self,
        hashes: impl Into<ValueList>,
        enable: bool,
    ) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .text("enable", enable);
        self.session
            .invoke_unit("/torrents/setAutoManagement", params)
            .await
    }

    pub async fn toggle_sequential_download(&self, hashes: impl Into<ValueList>) -> QbitResult<()> {
        self.hashes_action("/torrents/toggleSequentialDownload", hashes)
            .await
    }

    pub async fn toggle_first_last_piece_prio(
        &self,
        hashes: impl Into<ValueList>,
    ) -> QbitResult<()> {
        self.hashes_action("/torrents/toggleFirstLastPiecePrio", hashes)
            .await
    }

    pub async fn set_force_start(&self, hashes: impl Into<ValueList>, value: bool) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .text("value", value);
        self.session.invoke_unit("/torrents/setForceStart", params).await
    }

    pub async fn set_super_seeding(
        &self,
        hashes: impl Into<ValueList>,
        value: bool,
    ) -> QbitResult<()> {
        let params = Params::new()
            .list("hashes", hashes, Separator::Pipe)
            .text("value", value);
        self.session
            .invoke_unit("/torrents/setSuperSeeding", params)
            .await
    }

    pub async fn rename_file(&self, hash: &str, old_path: &str, new_path: &str) -> QbitResult<()> {
        let params = Params::new()
            .text("hash", hash)
            .text("oldPath", old_path)
            .text("newPath", new_path);
        self.session.invoke_unit("/torrents/renameFile", params).await
    }

    pub async fn rename_folder(&self, hash: &str, old_path: &str, new_path: &str) -> QbitResult<()> {
        let params = Params::new()
            .text("hash", hash)
            .text("oldPath", old_path)
            .text("newPath", new_path);
        self.session
            .invoke_unit("/torrents/renameFolder", params)
            .await
    }

    /// Add torrents from URLs, uploaded files, or both. Always multipart.
    ///
    /// Returns the daemon's reply text (`Ok.` or `Fails.`) untouched.
    #[instrument(skip(self, torrent), fields(api_op = "torrents_add"))]
    pub async fn add(&self, torrent: impl Into<AddTorrent>) -> QbitResult<Value> {
        let params = encode_add(torrent.into());
        self.session
            .invoke("/torrents/add", params, RequestOptions::multipart())
            .await
    }

    async fn hashes_action(&self, method: &str, hashes: impl Into<ValueList>) -> QbitResult<()> {
        let params = Params::new().list("hashes", hashes, Separator::Pipe);
        self.session.invoke_unit(method, params).await
    }
}

// =========================================================================
// Search
// =========================================================================

#[derive(Debug, Clone, Copy)]
pub struct SearchApi<'a> {
    session: &'a Session,
}

impl SearchApi<'_> {
    /// Start a search job and return its id. Pass `"all"` for every plugin or
    /// category.
    pub async fn start(
        &self,
        pattern: &str,
        plugins: impl Into<ValueList>,
        category: impl Into<ValueList>,
    ) -> QbitResult<u64> {
        let params = Params::new()
            .text("pattern", pattern)
            .list("plugins", plugins, Separator::Pipe)
            .list("category", category, Separator::Pipe);
        let job: SearchJob = self.session.invoke_json("/search/start", params).await?;
        Ok(job.id)
    }

    pub async fn stop(&self, id: u64) -> QbitResult<()> {
        self.session
            .invoke_unit("/search/stop", Params::new().text("id", id))
            .await
    }

    /// Status of one search job, or `None` when the daemon returns no record.
    pub async fn status(&self, id: u64) -> QbitResult<Option<SearchStatus>> {
        let statuses: Vec<SearchStatus> = self
            .session
            .invoke_json("/search/status", Params::new().text("id", id))
            .await?;
        Ok(statuses.into_iter().next())
    }

    /// Status of every search job.
    pub async fn statuses(&self) -> QbitResult<Vec<SearchStatus>> {
        self.session
            .invoke_json("/search/status", Params::new())
            .await
    }

    /// Results of a search job; `limit` 0 means no limit.
    pub async fn results(&self, id: u64, limit: i64, offset: i64) -> QbitResult<Vec<SearchResult>> {
        let params = Params::new()
            .text("id", id)
            .text("limit", limit)
            .text("offset", offset);
        let results: SearchResults = self.session.invoke_json("/search/results", params).await?;
        Ok(results.results)
    }

    pub async fn delete(&self, id: u64) -> QbitResult<()> {
        self.session
            .invoke_unit("/search/delete", Params::new().text("id", id))
            .await
    }

    pub async fn plugins(&self) -> QbitResult<Vec<SearchPlugin>> {
        self.session
            .invoke_json("/search/plugins", Params::new())
            .await
    }

    pub async fn install_plugin(&self, sources: impl Into<ValueList>) -> QbitResult<()> {
        let params = Params::new().list("sources", sources, Separator::Pipe);
        self.session.invoke_unit("/search/installPlugin", params).await
    }

    pub async fn uninstall_plugin(&self, names: impl Into<ValueList>) -> QbitResult<()> {
        let params = Params::new().list("names", names, Separator::Pipe);
        self.session
            .invoke_unit("/search/uninstallPlugin", params)
            .await
    }

    pub async fn enable_plugin(&self, names: impl Into<ValueList>, enable: bool) -> QbitResult<()> {
        let params = Params::new()
            .list("names", names, Separator::Comma)
            .text("enable", enable);
        self.session.invoke_unit("/search/enablePlugin", params).await
    }

    pub async fn update_plugins(&self) -> QbitResult<()> {
        self.session
            .invoke_unit("/search/updatePlugins", Params::new())
            .await
    }
}
