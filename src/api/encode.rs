//! Wire encodings for request parameters.
//!
//! Everything here is pure and infallible: inputs are turned into the exact
//! strings the WebUI API expects, and odd inputs are passed through as their
//! string form rather than rejected.

use std::path::Path;

use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::multipart::{Form, Part};

use crate::api::types::{AddTorrent, TorrentAddParameters, TorrentInfoParameters};
use crate::error::QbitResult;

/// Content type attached to every uploaded torrent file.
pub const TORRENT_CONTENT_TYPE: &str = "application/x-bittorrent";

/// Inert field appended to `torrents/add` bodies. The daemon's multipart
/// parser drops the last part, so this is what gets dropped instead.
pub const FILLER_FIELD: (&str, &str) = ("dummy", "true");

/// Bytes escaped in a URL component: everything except alphanumerics and
/// `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Separator used to join a multi-value field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Pipe,
    Comma,
    Newline,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Pipe => "|",
            Separator::Comma => ",",
            Separator::Newline => "\n",
        }
    }
}

/// A parameter that may be given as one value or as many.
///
/// A scalar is a one-element list, so joining it yields its own string form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueList(Vec<String>);

impl ValueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl ToString) {
        self.0.push(value.to_string());
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, separator: Separator) -> String {
        self.0.join(separator.as_str())
    }
}

impl From<&str> for ValueList {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for ValueList {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<&String> for ValueList {
    fn from(value: &String) -> Self {
        Self(vec![value.clone()])
    }
}

macro_rules! impl_scalar_value_list {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ValueList {
                fn from(value: $t) -> Self {
                    Self(vec![value.to_string()])
                }
            }
        )*
    };
}

impl_scalar_value_list!(i32, i64, u32, u64, usize);

impl<T: ToString> From<Vec<T>> for ValueList {
    fn from(values: Vec<T>) -> Self {
        Self(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&Vec<T>> for ValueList {
    fn from(values: &Vec<T>) -> Self {
        Self(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for ValueList {
    fn from(values: &[T]) -> Self {
        Self(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for ValueList {
    fn from(values: [T; N]) -> Self {
        Self(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> FromIterator<T> for ValueList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(|v| v.to_string()).collect())
    }
}

/// URL-component escaping, applied to filter values before form encoding.
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A torrent file to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentFile {
    pub file_name: String,
    pub content: Bytes,
}

impl TorrentFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Read a `.torrent` file from disk. The contents are not inspected.
    pub async fn from_path(path: impl AsRef<Path>) -> QbitResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.torrent".to_string());
        Ok(Self::new(file_name, content))
    }

    fn into_part(self) -> QbitResult<Part> {
        Ok(Part::bytes(self.content.to_vec())
            .file_name(self.file_name)
            .mime_str(TORRENT_CONTENT_TYPE)?)
    }
}

/// A single encoded parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Files(Vec<TorrentFile>),
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Files(_) => None,
        }
    }
}

/// Ordered, already-encoded request parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    fields: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar field using its string form.
    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.fields
            .push((name.to_string(), ParamValue::Text(value.to_string())));
        self
    }

    /// Add a scalar field only when it is set.
    pub fn opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    /// Add a multi-value field joined with `separator`.
    pub fn list(self, name: &str, values: impl Into<ValueList>, separator: Separator) -> Self {
        let joined = values.into().join(separator);
        self.text(name, joined)
    }

    pub fn files(mut self, name: &str, files: Vec<TorrentFile>) -> Self {
        self.fields.push((name.to_string(), ParamValue::Files(files)));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_text)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text fields as `application/x-www-form-urlencoded` pairs. File fields
    /// cannot be form-encoded and are skipped.
    pub fn form_pairs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(n, v)| v.as_text().map(|t| (n.as_str(), t)))
            .collect()
    }

    /// Build a `multipart/form-data` body, one part per text field and one
    /// part per uploaded file, in insertion order.
    pub fn into_multipart(self) -> QbitResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            match value {
                ParamValue::Text(text) => form = form.text(name, text),
                ParamValue::Files(files) => {
                    for file in files {
                        form = form.part(name.clone(), file.into_part()?);
                    }
                }
            }
        }
        Ok(form)
    }
}

/// Encode the query of `torrents/info`.
pub fn encode_info_query(query: &TorrentInfoParameters) -> Params {
    let mut params = Params::new()
        .opt("filter", query.filter)
        .opt("category", query.category.as_deref().map(percent_encode))
        .opt("tag", query.tag.as_deref().map(percent_encode))
        .opt("sort", query.sort.as_deref())
        .opt("reverse", query.reverse)
        .opt("limit", query.limit)
        .opt("offset", query.offset);
    if let Some(hashes) = &query.hashes {
        params = params.list("hashes", hashes.clone(), Separator::Pipe);
    }
    params
}

/// Encode the body of `torrents/add`.
pub fn encode_add(torrent: AddTorrent) -> Params {
    let params = match torrent {
        AddTorrent::Urls(urls) => Params::new().list("urls", urls, Separator::Newline),
        AddTorrent::Params(p) => encode_add_params(*p),
    };
    params.text(FILLER_FIELD.0, FILLER_FIELD.1)
}

fn encode_add_params(p: TorrentAddParameters) -> Params {
    let mut params = Params::new();
    if let Some(urls) = p.urls {
        params = params.list("urls", urls, Separator::Newline);
    }
    if !p.torrents.is_empty() {
        params = params.files("torrents", p.torrents);
    }
    if let Some(tags) = p.tags {
        params = params.list("tags", tags, Separator::Comma);
    }
    params
        .opt("savepath", p.savepath)
        .opt("cookie", p.cookie)
        .opt("category", p.category)
        .opt("skip_checking", p.skip_checking)
        .opt("paused", p.paused)
        .opt("root_folder", p.root_folder)
        .opt("rename", p.rename)
        .opt("upLimit", p.up_limit)
        .opt("dlLimit", p.dl_limit)
        .opt("ratioLimit", p.ratio_limit)
        .opt("seedingTimeLimit", p.seeding_time_limit)
        .opt("autoTMM", p.auto_tmm)
        .opt("sequentialDownload", p.sequential_download)
        .opt("firstLastPiecePrio", p.first_last_piece_prio)
}
