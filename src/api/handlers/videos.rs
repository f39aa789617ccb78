//! Handlers for the video ranking endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::videos::{RecordDownloadRequest, RecordDownloadResponse, TopVideosQuery};
use crate::api::extractors::{AppJson, AppQuery};
use crate::domain::entities::VideoRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most downloaded videos.
///
/// # Endpoint
///
/// `GET /api/videos`
///
/// # Query Parameters
///
/// - `limit` (optional): Number of videos, 1-100 (default: 20)
///
/// # Errors
///
/// Returns 400 if `limit` is out of range.
/// Returns 500 `Failed to fetch videos` on storage errors.
pub async fn top_videos_handler(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TopVideosQuery>,
) -> Result<Json<Vec<VideoRecord>>, AppError> {
    let videos = state
        .video_service
        .top_videos(query.limit)
        .await
        .map_err(|e| e.masked("Failed to fetch videos"))?;

    Ok(Json(videos))
}

/// Registers one download of a video.
///
/// # Endpoint
///
/// `POST /api/videos`
///
/// # Request
///
/// ```json
/// { "url": "https://twitter.com/i/status/1", "title": "猫", "thumbnail": "https://..." }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "created": false, "video": { "id": 1, "download_count": 1251, ... } }
/// ```
///
/// # Errors
///
/// Returns 400 `URL and title are required` if either is missing or blank.
/// Returns 500 `Failed to add video download` on storage errors.
pub async fn record_download_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RecordDownloadRequest>,
) -> Result<Json<RecordDownloadResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .video_service
        .record_download(payload.into())
        .await
        .map_err(|e| e.masked("Failed to add video download"))?;

    Ok(Json(RecordDownloadResponse {
        success: true,
        created: outcome.created,
        video: outcome.video,
    }))
}
