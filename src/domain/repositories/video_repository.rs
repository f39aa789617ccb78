//! Repository trait for video records.

use crate::domain::entities::{DownloadOutcome, NewVideoDownload, VideoRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Data access for [`VideoRecord`]s.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - flat JSON file
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process fixture
/// - [`crate::infrastructure::persistence::PgStore`] - PostgreSQL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Returns at most `limit` videos ordered by `download_count` descending.
    ///
    /// Videos with equal counts are ordered by ascending id.
    async fn top(&self, limit: usize) -> Result<Vec<VideoRecord>, AppError>;

    /// Finds a video by its exact source URL.
    async fn find_by_url(&self, url: &str) -> Result<Option<VideoRecord>, AppError>;

    /// Registers one download.
    ///
    /// Increments the counter of the video with the same URL by exactly one,
    /// or creates a new record with a counter of one. Must be atomic with
    /// respect to concurrent calls on the same store.
    async fn record_download(&self, download: NewVideoDownload)
    -> Result<DownloadOutcome, AppError>;

    /// Counts all video records.
    async fn count(&self) -> Result<i64, AppError>;
}
