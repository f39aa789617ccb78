//! API route configuration.

use crate::api::handlers::{
    blog_handler, blog_post_handler, record_download_handler, top_videos_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /videos`      - Top videos by download count
/// - `POST /videos`      - Register a video download
/// - `GET  /blog`        - All blog posts, or one with `?id=`
/// - `GET  /blog/{id}`   - One blog post
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/videos",
            get(top_videos_handler).post(record_download_handler),
        )
        .route("/blog", get(blog_handler))
        .route("/blog/{id}", get(blog_post_handler))
}
