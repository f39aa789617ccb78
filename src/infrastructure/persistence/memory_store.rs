//! In-memory store seeded from fixtures. Data lives until the process exits.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{BlogPost, DownloadOutcome, NewVideoDownload, VideoRecord};
use crate::domain::repositories::{BlogRepository, StorageBackend, VideoRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::Dataset;

pub struct MemoryStore {
    data: RwLock<Dataset>,
}

impl MemoryStore {
    /// Creates a store holding the seed fixtures.
    pub fn new() -> Self {
        Self::with_dataset(Dataset::seeded(Utc::now()))
    }

    /// Creates a store holding `data`. Used by tests that need custom fixtures.
    pub fn with_dataset(data: Dataset) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoRepository for MemoryStore {
    async fn top(&self, limit: usize) -> Result<Vec<VideoRecord>, AppError> {
        Ok(self.data.read().await.top_videos(limit))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<VideoRecord>, AppError> {
        Ok(self.data.read().await.find_video(url).cloned())
    }

    async fn record_download(
        &self,
        download: NewVideoDownload,
    ) -> Result<DownloadOutcome, AppError> {
        Ok(self.data.write().await.record_download(download, Utc::now()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.data.read().await.videos.len() as i64)
    }
}

#[async_trait]
impl BlogRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.data.read().await.posts_newest_first())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, AppError> {
        Ok(self.data.read().await.find_post(id).cloned())
    }
}

#[async_trait]
impl StorageBackend for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn reset(&self) -> Result<(), AppError> {
        *self.data.write().await = Dataset::seeded(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_concurrent_downloads_do_not_duplicate() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .record_download(NewVideoDownload {
                            url: "https://x.com/u/status/7".to_string(),
                            title: "同時".to_string(),
                            thumbnail: None,
                        })
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().created {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.count().await.unwrap(), 6);
        let video = store
            .find_by_url("https://x.com/u/status/7")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(video.download_count, 50);
    }
}
