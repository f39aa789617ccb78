//! Backend-level operations shared by every store.

use crate::error::AppError;
use async_trait::async_trait;

/// Operations on the store as a whole rather than on one entity type.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Short backend name used in logs and health output (`json`, `memory`, `postgres`).
    fn name(&self) -> &'static str;

    /// Verifies that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Discards all data and re-seeds the initial fixtures.
    async fn reset(&self) -> Result<(), AppError>;
}
