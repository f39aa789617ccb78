//! Blog post service.

use crate::domain::entities::BlogPost;
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;
use crate::utils::markdown::render_markdown;
use serde_json::json;
use std::sync::Arc;

/// A post together with its rendered body.
#[derive(Debug, Clone)]
pub struct RenderedPost {
    pub post: BlogPost,
    pub html: String,
    pub tags: Vec<String>,
}

/// Service for reading and rendering blog posts.
pub struct BlogService<R: BlogRepository + ?Sized = dyn BlogRepository> {
    repository: Arc<R>,
}

impl<R: BlogRepository + ?Sized> BlogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_post(&self, id: i64) -> Result<BlogPost, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog post not found", json!({ "id": id })))
    }

    /// Retrieves a post and renders its markdown body to HTML.
    ///
    /// # Errors
    ///
    /// Same as [`BlogService::get_post`].
    pub async fn render_post(&self, id: i64) -> Result<RenderedPost, AppError> {
        let post = self.get_post(id).await?;
        let html = render_markdown(&post.content);
        let tags = post.tag_list();

        Ok(RenderedPost { post, html, tags })
    }
}
