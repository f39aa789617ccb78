//! Video ranking page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::views::VideoCard;

/// Template for the video ranking grid.
#[derive(Template, WebTemplate)]
#[template(path = "ranking.html")]
pub struct RankingTemplate {
    pub videos: Vec<VideoCard>,
}

/// Renders the top 20 videos.
///
/// # Endpoint
///
/// `GET /ranking`
pub async fn ranking_handler(State(state): State<AppState>) -> Result<RankingTemplate, PageError> {
    let videos = state.video_service.top_videos(None).await?;

    Ok(RankingTemplate {
        videos: VideoCard::ranked(videos),
    })
}
