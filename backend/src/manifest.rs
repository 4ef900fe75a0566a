//! Builds the resource manifest from the upload directory.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

const MIB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub title: String,
    pub filename: String,
    #[serde(rename = "originalName")]
    pub original_name: String,
    pub size: String,
    pub date: String,
    /// Modification time in seconds since the epoch.
    pub timestamp: f64,
}

/// `"1.25 MB"` from 0.1 MiB up, whole kilobytes below that.
pub fn format_size(bytes: u64) -> String {
    let mib = bytes as f64 / MIB;
    if mib >= 0.1 {
        format!("{:.2} MB", mib)
    } else {
        format!("{} KB", (bytes as f64 / 1024.0) as u64)
    }
}

pub fn format_date(modified: SystemTime) -> String {
    DateTime::<Local>::from(modified).format("%Y.%m.%d").to_string()
}

fn epoch_seconds(modified: SystemTime) -> f64 {
    modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Lists regular, non-hidden files, newest first. A missing directory is an
/// empty manifest.
pub async fn list_resources(dir: &Path) -> Result<Vec<ResourceEntry>, ManifestError> {
    let mut read_dir = match tokio::fs::read_dir(dir).await {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(ManifestError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut entries = Vec::new();
    loop {
        let entry = match read_dir.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(source) => {
                return Err(ManifestError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };
        let Some(filename) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::warn!("Skipping non UTF-8 file name in {}", dir.display());
            continue;
        };
        if filename.starts_with('.') {
            continue;
        }
        // Follows symlinks, like a plain `is_file` check.
        let metadata = match tokio::fs::metadata(entry.path()).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", filename, e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().unwrap_or(UNIX_EPOCH);
        entries.push(ResourceEntry {
            title: filename.clone(),
            original_name: filename.clone(),
            filename,
            size: format_size(metadata.len()),
            date: format_date(modified),
            timestamp: epoch_seconds(modified),
        });
    }

    entries.sort_by(|a, b| b.timestamp.total_cmp(&a.timestamp));
    Ok(entries)
}
