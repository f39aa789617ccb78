//! Video record entity representing a downloadable video and its popularity counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A video that users have downloaded through the site.
///
/// `url` is unique across all records. `download_count` is the only field
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub thumbnail: String,
    pub download_count: i64,
    pub created_at: DateTime<Utc>,
}

impl VideoRecord {
    /// Creates a record for a video downloaded for the first time.
    pub fn first_download(id: i64, download: NewVideoDownload, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            url: download.url,
            title: download.title,
            thumbnail: download.thumbnail.unwrap_or_default(),
            download_count: 1,
            created_at,
        }
    }
}

/// Input for registering one download of a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideoDownload {
    pub url: String,
    pub title: String,
    pub thumbnail: Option<String>,
}

/// Result of registering a download.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    /// The record after the download was applied.
    pub video: VideoRecord,
    /// `true` when the URL was unknown and a new record was created.
    pub created: bool,
}
