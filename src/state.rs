//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{BlogService, SiteService, VideoService};
use crate::domain::repositories::StorageBackend;
use crate::infrastructure::persistence::Storage;

#[derive(Clone)]
pub struct AppState {
    pub video_service: Arc<VideoService>,
    pub blog_service: Arc<BlogService>,
    pub site_service: Arc<SiteService>,
    pub storage: Arc<dyn StorageBackend>,
    /// Public base URL used to build share links, without trailing slash.
    pub site_url: String,
}

impl AppState {
    /// Wires the services on top of an opened store.
    pub fn new(storage: Storage, site_url: impl Into<String>) -> Self {
        Self {
            video_service: Arc::new(VideoService::new(storage.videos)),
            blog_service: Arc::new(BlogService::new(storage.blog)),
            site_service: Arc::new(SiteService::new()),
            storage: storage.backend,
            site_url: site_url.into().trim_end_matches('/').to_string(),
        }
    }
}
