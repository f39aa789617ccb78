#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use twitter_ranking::domain::entities::{BlogPost, DownloadOutcome, NewVideoDownload, VideoRecord};
use twitter_ranking::domain::repositories::{BlogRepository, StorageBackend, VideoRepository};
use twitter_ranking::error::AppError;
use twitter_ranking::infrastructure::persistence::{Dataset, MemoryStore, Storage};
use twitter_ranking::routes::build_router;
use twitter_ranking::state::AppState;

pub const SITE_URL: &str = "http://localhost:3000";

/// State backed by a fresh in-memory store holding the seed data.
pub fn create_test_state() -> AppState {
    AppState::new(Storage::from_store(MemoryStore::new()), SITE_URL)
}

/// State backed by an in-memory store holding `data`.
pub fn create_state_with(data: Dataset) -> AppState {
    AppState::new(Storage::from_store(MemoryStore::with_dataset(data)), SITE_URL)
}

/// State whose store fails every call.
pub fn create_broken_state() -> AppState {
    AppState::new(Storage::from_store(BrokenStore), SITE_URL)
}

/// Full router without rate limiting.
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state, false)).unwrap()
}

/// Store that fails with an internal error, as an unreadable disk would.
pub struct BrokenStore;

fn broken() -> AppError {
    AppError::internal("Storage I/O error", json!({ "reason": "disk unavailable" }))
}

#[async_trait]
impl VideoRepository for BrokenStore {
    async fn top(&self, _limit: usize) -> Result<Vec<VideoRecord>, AppError> {
        Err(broken())
    }

    async fn find_by_url(&self, _url: &str) -> Result<Option<VideoRecord>, AppError> {
        Err(broken())
    }

    async fn record_download(
        &self,
        _download: NewVideoDownload,
    ) -> Result<DownloadOutcome, AppError> {
        Err(broken())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(broken())
    }
}

#[async_trait]
impl BlogRepository for BrokenStore {
    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        Err(broken())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<BlogPost>, AppError> {
        Err(broken())
    }
}

#[async_trait]
impl StorageBackend for BrokenStore {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(broken())
    }

    async fn reset(&self) -> Result<(), AppError> {
        Err(broken())
    }
}
