//! Repository trait for blog posts.

use crate::domain::entities::BlogPost;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only data access for [`BlogPost`]s.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Lists all posts ordered by `created_at` descending.
    async fn list(&self) -> Result<Vec<BlogPost>, AppError>;

    /// Finds a post by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(post))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, AppError>;
}
