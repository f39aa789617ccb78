//! DTOs for the video ranking endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{NewVideoDownload, VideoRecord};

/// Query parameters for `GET /api/videos`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct TopVideosQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Body of `POST /api/videos`.
///
/// `url` and `title` default to empty when missing or `null`, so they reach
/// the service and are reported as a validation error like an empty one.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct RecordDownloadRequest {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(length(max = 500, message = "Title is too long"))]
    pub title: String,

    #[validate(length(max = 2048, message = "Thumbnail URL is too long"))]
    pub thumbnail: Option<String>,
}

impl From<RecordDownloadRequest> for NewVideoDownload {
    fn from(req: RecordDownloadRequest) -> Self {
        NewVideoDownload {
            url: req.url,
            title: req.title,
            thumbnail: req.thumbnail,
        }
    }
}

/// Response of `POST /api/videos`.
#[derive(Debug, Serialize)]
pub struct RecordDownloadResponse {
    pub success: bool,
    /// `true` when this was the first download of the URL.
    pub created: bool,
    pub video: VideoRecord,
}
