//! Store implementations of the domain repository traits.
//!
//! # Stores
//!
//! - [`JsonFileStore`] - Whole dataset in one JSON file, rewritten on change
//! - [`MemoryStore`] - Seed fixtures held in process memory
//! - [`PgStore`] - PostgreSQL tables managed by `migrations/`
//!
//! Every store implements [`VideoRepository`], [`BlogRepository`] and
//! [`StorageBackend`]. [`open_storage`] picks one from [`Config`].

pub mod dataset;
pub mod json_store;
pub mod memory_store;
pub mod pg_store;

pub use dataset::Dataset;
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use pg_store::PgStore;

use std::sync::Arc;

use crate::config::{Config, StorageKind};
use crate::domain::repositories::{BlogRepository, StorageBackend, VideoRepository};
use crate::error::AppError;

/// One opened store, viewed through each of its repository traits.
#[derive(Clone)]
pub struct Storage {
    pub videos: Arc<dyn VideoRepository>,
    pub blog: Arc<dyn BlogRepository>,
    pub backend: Arc<dyn StorageBackend>,
}

impl Storage {
    pub fn from_store<S>(store: S) -> Self
    where
        S: VideoRepository + BlogRepository + StorageBackend + 'static,
    {
        let store = Arc::new(store);
        Self {
            videos: store.clone(),
            blog: store.clone(),
            backend: store,
        }
    }
}

/// Opens the store selected by `config.storage_backend`.
///
/// The PostgreSQL store is migrated and seeded on first use.
///
/// # Errors
///
/// Returns an error if the data file cannot be created or the database is
/// unreachable.
pub async fn open_storage(config: &Config) -> Result<Storage, AppError> {
    let storage = match config.storage_backend {
        StorageKind::Json => Storage::from_store(JsonFileStore::open(&config.data_file).await?),
        StorageKind::Memory => Storage::from_store(MemoryStore::new()),
        StorageKind::Postgres => {
            let store = PgStore::connect(config).await?;
            store.migrate().await?;
            if store.seed_if_empty().await? {
                tracing::info!("Inserted initial data into empty database");
            }
            Storage::from_store(store)
        }
    };

    tracing::info!(backend = storage.backend.name(), "Storage ready");
    Ok(storage)
}
