//! Handlers for the blog endpoints.

use axum::{Json, extract::State};

use crate::api::dto::blog::{BlogQuery, BlogResponse};
use crate::api::extractors::{AppPath, AppQuery};
use crate::domain::entities::BlogPost;
use crate::error::AppError;
use crate::state::AppState;

const FETCH_FAILED: &str = "Failed to fetch blog posts";

/// Lists all posts, or returns one post when `id` is given.
///
/// # Endpoint
///
/// `GET /api/blog`
/// `GET /api/blog?id={id}`
///
/// # Errors
///
/// Returns 404 if `id` is given and no post has it.
/// Returns 500 `Failed to fetch blog posts` on storage errors.
pub async fn blog_handler(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<BlogQuery>,
) -> Result<Json<BlogResponse>, AppError> {
    let response = match query.id {
        Some(id) => BlogResponse::Single(
            state
                .blog_service
                .get_post(id)
                .await
                .map_err(|e| e.masked(FETCH_FAILED))?,
        ),
        None => BlogResponse::List(
            state
                .blog_service
                .list_posts()
                .await
                .map_err(|e| e.masked(FETCH_FAILED))?,
        ),
    };

    Ok(Json(response))
}

/// Returns one post.
///
/// # Endpoint
///
/// `GET /api/blog/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if no post has this id.
pub async fn blog_post_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<BlogPost>, AppError> {
    let post = state
        .blog_service
        .get_post(id)
        .await
        .map_err(|e| e.masked(FETCH_FAILED))?;

    Ok(Json(post))
}
