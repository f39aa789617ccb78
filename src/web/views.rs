//! View models for the templates.
//!
//! Everything here is pre-formatted so templates only print fields.

use crate::domain::entities::{BlogPost, SiteRecord, VideoRecord};
use crate::utils::format::{ja_date, rank_badge, thousands, thumbnail_or_default};

/// One entry of the ranking-site list on the home page.
#[derive(Debug, Clone)]
pub struct SiteCard {
    pub rank: u32,
    pub badge: &'static str,
    pub title: String,
    pub url: String,
    pub description: String,
    pub realtime_url: Option<String>,
    pub notice: Option<String>,
    pub highlights: [String; 2],
}

impl From<SiteRecord> for SiteCard {
    fn from(site: SiteRecord) -> Self {
        Self {
            rank: site.rank,
            badge: rank_badge(site.rank as usize),
            title: site.title,
            url: site.url,
            description: site.description,
            realtime_url: site.realtime_url,
            notice: site.notice,
            highlights: site.highlights,
        }
    }
}

/// One tile of the video ranking grid.
#[derive(Debug, Clone)]
pub struct VideoCard {
    pub rank: usize,
    pub badge: &'static str,
    pub podium: bool,
    pub title: String,
    pub url: String,
    pub thumbnail: String,
    pub downloads: String,
    pub date: String,
}

impl VideoCard {
    /// Builds cards from videos already in ranking order. Ranks start at 1.
    pub fn ranked(videos: Vec<VideoRecord>) -> Vec<Self> {
        videos
            .into_iter()
            .zip(1..)
            .map(|(video, rank)| Self {
                rank,
                badge: rank_badge(rank),
                podium: rank <= 3,
                thumbnail: thumbnail_or_default(&video.thumbnail).to_string(),
                downloads: thousands(video.download_count),
                date: ja_date(&video.created_at),
                title: video.title,
                url: video.url,
            })
            .collect()
    }
}

/// Blog list entry.
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub date: String,
    pub tags: Vec<String>,
}

impl From<BlogPost> for PostSummary {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            tags: post.tag_list(),
            date: ja_date(&post.created_at),
            title: post.title,
            author: post.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{DEFAULT_THUMBNAIL, seed_videos};
    use chrono::Utc;

    #[test]
    fn test_video_cards_are_ranked_from_one() {
        let mut videos = seed_videos(Utc::now());
        videos[3].thumbnail.clear();

        let cards = VideoCard::ranked(videos);

        assert_eq!(cards[0].rank, 1);
        assert_eq!(cards[0].badge, "gold");
        assert_eq!(cards[0].downloads, "1,250");
        assert!(cards[2].podium);
        assert!(!cards[3].podium);
        assert_eq!(cards[3].badge, "blue");
        assert_eq!(cards[3].thumbnail, DEFAULT_THUMBNAIL);
    }
}
