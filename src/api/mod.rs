pub mod client;
pub mod encode;
pub mod session;
pub mod types;

pub use client::{create_api_client, QbitClient};
pub use encode::{Params, Separator, TorrentFile, ValueList};
pub use session::{RequestOptions, Session};
pub use types::{AddTorrent, TorrentAddParameters, TorrentFilter, TorrentInfo, TorrentInfoParameters};
