//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    blog_detail_handler, blog_list_handler, download_form_handler, home_handler, ranking_handler,
};
use axum::{Router, routing::get};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET  /`            - Landing page
/// - `POST /`            - Simulated download form
/// - `GET  /ranking`     - Video ranking grid
/// - `GET  /blog`        - Blog index
/// - `GET  /blog/{id}`   - Blog post
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler).post(download_form_handler))
        .route("/ranking", get(ranking_handler))
        .route("/blog", get(blog_list_handler))
        .route("/blog/{id}", get(blog_detail_handler))
}
