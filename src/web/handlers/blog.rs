//! Blog list and detail page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::format::ja_date;
use crate::utils::share::{ShareLink, share_links};
use crate::web::error::{PageError, not_found_page};
use crate::web::views::PostSummary;

const POST_NOT_FOUND: &str = "お探しの記事は見つかりませんでした";

/// Template for the blog index.
#[derive(Template, WebTemplate)]
#[template(path = "blog_list.html")]
pub struct BlogListTemplate {
    pub posts: Vec<PostSummary>,
}

/// Template for a single post.
///
/// `html` is the rendered markdown body and is printed unescaped.
#[derive(Template, WebTemplate)]
#[template(path = "blog_detail.html")]
pub struct BlogDetailTemplate {
    pub title: String,
    pub author: String,
    pub date: String,
    pub html: String,
    pub tags: Vec<String>,
    pub shares: Vec<ShareLink>,
}

/// Renders the blog index, newest first.
///
/// # Endpoint
///
/// `GET /blog`
pub async fn blog_list_handler(
    State(state): State<AppState>,
) -> Result<BlogListTemplate, PageError> {
    let posts = state.blog_service.list_posts().await?;

    Ok(BlogListTemplate {
        posts: posts.into_iter().map(PostSummary::from).collect(),
    })
}

/// Renders one post with tags and share buttons.
///
/// # Endpoint
///
/// `GET /blog/{id}`
///
/// Unknown or non-numeric ids render the HTML 404 page.
pub async fn blog_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let Ok(id) = id.parse::<i64>() else {
        return Ok(not_found_page(POST_NOT_FOUND));
    };

    let rendered = match state.blog_service.render_post(id).await {
        Ok(rendered) => rendered,
        Err(AppError::NotFound { .. }) => return Ok(not_found_page(POST_NOT_FOUND)),
        Err(e) => return Err(e.into()),
    };
    let shares = share_links(&state.site_url, rendered.post.id, &rendered.post.title);

    Ok(BlogDetailTemplate {
        date: ja_date(&rendered.post.created_at),
        title: rendered.post.title,
        author: rendered.post.author,
        html: rendered.html,
        tags: rendered.tags,
        shares,
    }
    .into_response())
}
