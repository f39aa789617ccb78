//! HTML error pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Renders `templates/not_found.html`.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
}

/// Renders `templates/error.html`.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {}

/// Error returned by page handlers.
///
/// Wraps [`AppError`] and renders an HTML page instead of a JSON body.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::NotFound { message, .. } => {
                tracing::debug!(%message, "Page not found");
                not_found_page("お探しのページは見つかりませんでした")
            }
            other => {
                tracing::error!(code = other.code(), error = %other, "Page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorTemplate {}).into_response()
            }
        }
    }
}

/// 404 response with the given message.
pub fn not_found_page(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            message: message.to_string(),
        },
    )
        .into_response()
}
