//! Fallback for unknown paths.

use axum::response::Response;

use crate::web::error::not_found_page;

/// Renders the HTML 404 page for any unmatched route.
pub async fn not_found_handler() -> Response {
    not_found_page("お探しのページは見つかりませんでした")
}
