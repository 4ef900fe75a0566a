use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use web_sys::js_sys;

use crate::config;

/// Characters `encodeURI` escapes on top of controls and non-ASCII.
const URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// One downloadable entry of `board_data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceFile {
    pub title: String,
    pub date: String,
    pub size: String,
    pub filename: String,
    #[serde(rename = "originalName", default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
}

impl ResourceFile {
    /// Link into the uploads directory. The stored name is NFC-normalised
    /// first; browsers fall back to generated names for NFD paths.
    pub fn download_href(&self) -> String {
        let normalized: String = self.filename.nfc().collect();
        format!(
            "{}{}",
            config::UPLOADS_PREFIX,
            utf8_percent_encode(&normalized, URI)
        )
    }

    /// Value of the anchor's `download` attribute.
    pub fn download_name(&self) -> String {
        self.original_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.filename)
            .nfc()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid manifest: {0}")]
    Decode(String),
}

/// What the resource board currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardView {
    Loading,
    Empty,
    Failed,
    Loaded(Vec<ResourceFile>),
}

impl BoardView {
    pub fn from_result(result: Result<Vec<ResourceFile>, BoardError>) -> Self {
        match result {
            Ok(files) if files.is_empty() => Self::Empty,
            Ok(files) => Self::Loaded(files),
            Err(e) => {
                log::error!("Error fetching files: {}", e);
                Self::Failed
            }
        }
    }

    /// The single status line shown instead of rows, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(config::MSG_LOADING),
            Self::Empty => Some(config::MSG_EMPTY),
            Self::Failed => Some(config::MSG_LOAD_FAILED),
            Self::Loaded(_) => None,
        }
    }
}

/// Manifest URL with a cache-busting timestamp.
pub fn manifest_url(now_ms: f64) -> String {
    format!("{}?t={}", config::MANIFEST_PATH, now_ms as u64)
}

pub fn parse_manifest(body: &str) -> Result<Vec<ResourceFile>, BoardError> {
    serde_json::from_str(body).map_err(|e| BoardError::Decode(e.to_string()))
}

pub async fn fetch_manifest() -> Result<Vec<ResourceFile>, BoardError> {
    let url = manifest_url(js_sys::Date::now());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| BoardError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(BoardError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| BoardError::Network(e.to_string()))?;
    parse_manifest(&body)
}
