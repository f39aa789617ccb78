//! Flat JSON file store.
//!
//! The whole dataset is kept in memory behind a mutex and rewritten to disk
//! after every mutation. A missing or unreadable file is replaced by the
//! seed fixtures on open.

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::domain::entities::{BlogPost, DownloadOutcome, NewVideoDownload, VideoRecord};
use crate::domain::repositories::{BlogRepository, StorageBackend, VideoRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::Dataset;

/// Store backed by a single JSON document on disk.
pub struct JsonFileStore {
    path: PathBuf,
    data: Mutex<Dataset>,
}

impl JsonFileStore {
    /// Opens the data file at `path`, creating it with seed data if needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a fresh file cannot be written.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();

        let data = match load(&path).await {
            Ok(data) => {
                tracing::debug!(path = %path.display(), videos = data.videos.len(), "Loaded data file");
                data
            }
            Err(e) => {
                tracing::info!(
                    path = %path.display(),
                    reason = %e,
                    "Creating new database file with initial data"
                );
                let data = Dataset::seeded(Utc::now());
                persist(&path, &data).await?;
                data
            }
        };

        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn load(path: &Path) -> Result<Dataset, AppError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Writes to a sibling temp file and renames it over the target.
async fn persist(path: &Path, data: &Dataset) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, serde_json::to_vec_pretty(data)?).await?;
    tokio::fs::rename(&tmp, path).await?;

    Ok(())
}

#[async_trait]
impl VideoRepository for JsonFileStore {
    async fn top(&self, limit: usize) -> Result<Vec<VideoRecord>, AppError> {
        Ok(self.data.lock().await.top_videos(limit))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<VideoRecord>, AppError> {
        Ok(self.data.lock().await.find_video(url).cloned())
    }

    async fn record_download(
        &self,
        download: NewVideoDownload,
    ) -> Result<DownloadOutcome, AppError> {
        let mut guard = self.data.lock().await;

        let mut next = guard.clone();
        let outcome = next.record_download(download, Utc::now());
        persist(&self.path, &next).await?;
        *guard = next;

        Ok(outcome)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.data.lock().await.videos.len() as i64)
    }
}

#[async_trait]
impl BlogRepository for JsonFileStore {
    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.data.lock().await.posts_newest_first())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, AppError> {
        Ok(self.data.lock().await.find_post(id).cloned())
    }
}

#[async_trait]
impl StorageBackend for JsonFileStore {
    fn name(&self) -> &'static str {
        "json"
    }

    async fn ping(&self) -> Result<(), AppError> {
        tokio::fs::metadata(&self.path).await?;
        Ok(())
    }

    async fn reset(&self) -> Result<(), AppError> {
        let mut guard = self.data.lock().await;
        let fresh = Dataset::seeded(Utc::now());
        persist(&self.path, &fresh).await?;
        *guard = fresh;
        Ok(())
    }
}
