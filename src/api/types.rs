use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::api::encode::{TorrentFile, ValueList};

// =========================================================================
// Request shapes
// =========================================================================

/// State filter accepted by `torrents/info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TorrentFilter {
    All,
    Downloading,
    Seeding,
    Completed,
    Paused,
    Active,
    Inactive,
    Resumed,
    Stalled,
    StalledUploading,
    StalledDownloading,
    Errored,
}

/// Query for `torrents/info`. Unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct TorrentInfoParameters {
    pub filter: Option<TorrentFilter>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub sort: Option<String>,
    pub reverse: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub hashes: Option<ValueList>,
}

/// Options for `torrents/add`.
///
/// `urls`, `torrents` and `tags` get special encodings; every other field is
/// sent as-is when set.
#[derive(Debug, Clone, Default)]
pub struct TorrentAddParameters {
    pub urls: Option<ValueList>,
    pub torrents: Vec<TorrentFile>,
    pub savepath: Option<String>,
    /// Cookie header sent by the daemon when it fetches `urls`
    pub cookie: Option<String>,
    pub category: Option<String>,
    pub tags: Option<ValueList>,
    pub skip_checking: Option<bool>,
    pub paused: Option<bool>,
    pub root_folder: Option<bool>,
    pub rename: Option<String>,
    pub up_limit: Option<i64>,
    pub dl_limit: Option<i64>,
    pub ratio_limit: Option<f64>,
    pub seeding_time_limit: Option<i64>,
    pub auto_tmm: Option<bool>,
    pub sequential_download: Option<bool>,
    pub first_last_piece_prio: Option<bool>,
}

/// Input for `torrents/add`: bare URLs or a full option set.
#[derive(Debug, Clone)]
pub enum AddTorrent {
    Urls(ValueList),
    Params(Box<TorrentAddParameters>),
}

impl From<TorrentAddParameters> for AddTorrent {
    fn from(params: TorrentAddParameters) -> Self {
        AddTorrent::Params(Box::new(params))
    }
}

impl From<&str> for AddTorrent {
    fn from(url: &str) -> Self {
        AddTorrent::Urls(url.into())
    }
}

impl From<String> for AddTorrent {
    fn from(url: String) -> Self {
        AddTorrent::Urls(url.into())
    }
}

impl From<Vec<String>> for AddTorrent {
    fn from(urls: Vec<String>) -> Self {
        AddTorrent::Urls(urls.into())
    }
}

impl From<Vec<&str>> for AddTorrent {
    fn from(urls: Vec<&str>) -> Self {
        AddTorrent::Urls(urls.into())
    }
}

// =========================================================================
// Response shapes
// =========================================================================

/// Response from `app/buildInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInfo {
    pub qt: String,
    pub libtorrent: String,
    pub boost: String,
    pub openssl: String,
    pub bitness: u32,
}

/// Response from `transfer/info`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferInfo {
    pub dl_info_speed: u64,
    pub dl_info_data: u64,
    pub up_info_speed: u64,
    pub up_info_data: u64,
    pub dl_rate_limit: u64,
    pub up_rate_limit: u64,
    pub dht_nodes: u64,
    pub connection_status: String,
}

/// One entry of `torrents/info`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentInfo {
    pub hash: String,
    pub name: String,
    pub size: i64,
    pub total_size: i64,
    pub progress: f64,
    pub dlspeed: i64,
    pub upspeed: i64,
    pub priority: i64,
    pub num_seeds: i64,
    pub num_complete: i64,
    pub num_leechs: i64,
    pub num_incomplete: i64,
    pub ratio: f64,
    pub eta: i64,
    pub state: String,
    pub category: String,
    pub tags: String,
    pub save_path: String,
    pub added_on: i64,
    pub completion_on: i64,
    pub amount_left: i64,
    pub downloaded: i64,
    pub uploaded: i64,
    pub dl_limit: i64,
    pub up_limit: i64,
    pub ratio_limit: f64,
    pub seeding_time_limit: i64,
    pub auto_tmm: bool,
    pub force_start: bool,
    pub seq_dl: bool,
    pub f_l_piece_prio: bool,
    pub super_seeding: bool,
    pub magnet_uri: String,
    pub tracker: String,
}

/// Response from `torrents/properties`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentProperties {
    pub save_path: String,
    pub creation_date: i64,
    pub piece_size: i64,
    pub comment: String,
    pub total_wasted: i64,
    pub total_uploaded: i64,
    pub total_downloaded: i64,
    pub up_limit: i64,
    pub dl_limit: i64,
    pub time_elapsed: i64,
    pub seeding_time: i64,
    pub nb_connections: i64,
    pub share_ratio: f64,
    pub addition_date: i64,
    pub completion_date: i64,
    pub created_by: String,
    pub dl_speed: i64,
    pub up_speed: i64,
    pub eta: i64,
    pub last_seen: i64,
    pub peers: i64,
    pub seeds: i64,
    pub pieces_have: i64,
    pub pieces_num: i64,
    pub reannounce: i64,
    pub total_size: i64,
}

/// One entry of `torrents/trackers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracker {
    pub url: String,
    pub status: i64,
    pub tier: serde_json::Value,
    pub num_peers: i64,
    pub num_seeds: i64,
    pub num_leeches: i64,
    pub num_downloaded: i64,
    pub msg: String,
}

/// One entry of `torrents/webseeds`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSeed {
    pub url: String,
}

/// One entry of `torrents/files`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentContent {
    pub index: Option<i64>,
    pub name: String,
    pub size: i64,
    pub progress: f64,
    pub priority: i64,
    pub is_seed: bool,
    pub piece_range: Vec<i64>,
    pub availability: f64,
}

/// One value of `torrents/categories`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub name: String,
    #[serde(rename = "savePath")]
    pub save_path: String,
}

/// Response from `torrents/categories`, keyed by category name
pub type Categories = HashMap<String, Category>;

/// Response from `search/start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchJob {
    pub id: u64,
}

/// One entry of `search/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatus {
    pub id: u64,
    pub status: String,
    pub total: u64,
}

/// One entry of `search/results`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResult {
    pub descr_link: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_url: String,
    pub nb_leechers: i64,
    pub nb_seeders: i64,
    pub site_url: String,
}

/// Response from `search/results`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub results: Vec<SearchResult>,
    pub status: String,
    pub total: u64,
}

/// One entry of `search/plugins`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchPlugin {
    pub enabled: bool,
    pub full_name: String,
    pub name: String,
    pub supported_categories: serde_json::Value,
    pub url: String,
    pub version: String,
}
