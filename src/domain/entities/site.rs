//! Third-party ranking site listed on the home page.

use serde::Serialize;

/// A curated ranking site. Static content, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteRecord {
    pub id: i64,
    pub rank: u32,
    pub url: String,
    pub title: String,
    pub description: String,
    /// Link to the site's "new downloads" feed, if it has one.
    pub realtime_url: Option<String>,
    pub notice: Option<String>,
    pub highlights: [String; 2],
}
