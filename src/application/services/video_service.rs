//! Video ranking service.

use crate::domain::entities::{DownloadOutcome, NewVideoDownload, VideoRecord};
use crate::domain::repositories::VideoRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use url::Url;

/// Number of videos returned when no limit is given.
pub const DEFAULT_TOP_LIMIT: u32 = 20;

/// Largest accepted ranking limit.
pub const MAX_TOP_LIMIT: u32 = 100;

/// Service for the video ranking and download counter.
///
/// Generic over the repository so unit tests can inject mocks; the running
/// server uses the `dyn VideoRepository` default.
pub struct VideoService<R: VideoRepository + ?Sized = dyn VideoRepository> {
    repository: Arc<R>,
}

impl<R: VideoRepository + ?Sized> VideoService<R> {
    /// Creates a new video service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the most downloaded videos.
    ///
    /// # Arguments
    ///
    /// - `limit` - Number of videos, `1..=100`. Defaults to 20.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is out of range.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn top_videos(&self, limit: Option<u32>) -> Result<Vec<VideoRecord>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT);

        if !(1..=MAX_TOP_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(
                "Limit out of range",
                json!({ "min": 1, "max": MAX_TOP_LIMIT, "got": limit }),
            ));
        }

        self.repository.top(limit as usize).await
    }

    /// Registers one download of a video.
    ///
    /// Inputs are trimmed. A blank thumbnail is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` or `title` is empty, or if
    /// `url` or a given thumbnail is not an absolute http(s) URL.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn record_download(
        &self,
        download: NewVideoDownload,
    ) -> Result<DownloadOutcome, AppError> {
        let url = download.url.trim().to_string();
        let title = download.title.trim().to_string();

        if url.is_empty() || title.is_empty() {
            return Err(AppError::bad_request(
                "URL and title are required",
                json!({ "url": !url.is_empty(), "title": !title.is_empty() }),
            ));
        }

        let thumbnail = download
            .thumbnail
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        // Both values end up in href/src attributes of the ranking page.
        require_web_url("url", &url)?;
        if let Some(thumbnail) = &thumbnail {
            require_web_url("thumbnail", thumbnail)?;
        }

        let outcome = self
            .repository
            .record_download(NewVideoDownload {
                url,
                title,
                thumbnail,
            })
            .await?;

        tracing::info!(
            id = outcome.video.id,
            created = outcome.created,
            download_count = outcome.video.download_count,
            "Download recorded"
        );

        Ok(outcome)
    }

    /// Counts all known videos.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn require_web_url(field: &'static str, value: &str) -> Result<(), AppError> {
    match Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(AppError::bad_request(
            "URL must use http or https",
            json!({ "field": field }),
        )),
    }
}
