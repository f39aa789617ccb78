//! DTOs for the blog endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::BlogPost;

/// Query parameters for `GET /api/blog`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    /// When present, a single post is returned instead of the list.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub id: Option<i64>,
}

/// Either the full post list or one post.
///
/// Untagged, so the JSON is a bare array or a bare object.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BlogResponse {
    List(Vec<BlogPost>),
    Single(BlogPost),
}
