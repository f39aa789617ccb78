//! In-process dataset shared by the file and memory stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{BlogPost, DownloadOutcome, NewVideoDownload, VideoRecord};
use crate::domain::fixtures::{seed_blog_posts, seed_videos};

/// Complete contents of a non-relational store.
///
/// Serialized as the JSON data file:
///
/// ```json
/// { "videos": [], "blogPosts": [], "lastVideoId": 5, "lastBlogId": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub videos: Vec<VideoRecord>,
    pub blog_posts: Vec<BlogPost>,
    pub last_video_id: i64,
    pub last_blog_id: i64,
}

impl Dataset {
    /// Fresh dataset containing the seed fixtures.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let videos = seed_videos(now);
        let blog_posts = seed_blog_posts(now);
        let last_video_id = videos.iter().map(|v| v.id).max().unwrap_or(0);
        let last_blog_id = blog_posts.iter().map(|p| p.id).max().unwrap_or(0);

        Self {
            videos,
            blog_posts,
            last_video_id,
            last_blog_id,
        }
    }

    /// Top `limit` videos by download count, ties broken by ascending id.
    pub fn top_videos(&self, limit: usize) -> Vec<VideoRecord> {
        let mut videos = self.videos.clone();
        videos.sort_by(|a, b| {
            b.download_count
                .cmp(&a.download_count)
                .then_with(|| a.id.cmp(&b.id))
        });
        videos.truncate(limit);
        videos
    }

    pub fn find_video(&self, url: &str) -> Option<&VideoRecord> {
        self.videos.iter().find(|v| v.url == url)
    }

    /// Increments the counter of a known URL or appends a new record.
    pub fn record_download(
        &mut self,
        download: NewVideoDownload,
        now: DateTime<Utc>,
    ) -> DownloadOutcome {
        if let Some(existing) = self.videos.iter_mut().find(|v| v.url == download.url) {
            existing.download_count += 1;
            return DownloadOutcome {
                video: existing.clone(),
                created: false,
            };
        }

        self.last_video_id += 1;
        let video = VideoRecord::first_download(self.last_video_id, download, now);
        self.videos.push(video.clone());

        DownloadOutcome {
            video,
            created: true,
        }
    }

    /// All posts, newest first, ties broken by ascending id.
    pub fn posts_newest_first(&self) -> Vec<BlogPost> {
        let mut posts = self.blog_posts.clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        posts
    }

    pub fn find_post(&self, id: i64) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.id == id)
    }
}
