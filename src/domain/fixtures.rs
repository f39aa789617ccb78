//! Seed data every store starts from.

use chrono::{DateTime, Utc};

use crate::domain::entities::{BlogPost, VideoRecord};

/// Article body of the single seeded post. The script inside is reference
/// text only and is never executed by the service.
pub const DOWNLOADER_ARTICLE: &str =
    include_str!("../../content/posts/python-twitter-video-downloader.md");

/// Thumbnail used when a video has none.
pub const DEFAULT_THUMBNAIL: &str = "https://images.pexels.com/photos/1714208/pexels-photo-1714208.jpeg?auto=compress&cs=tinysrgb&w=300";

const SEED_VIDEOS: &[(&str, &str, &str, i64)] = &[
    (
        "https://twitter.com/i/status/1234567890",
        "面白いネコの動画",
        "https://images.pexels.com/photos/45201/kitty-cat-kitten-pet-45201.jpeg?auto=compress&cs=tinysrgb&w=300",
        1250,
    ),
    (
        "https://twitter.com/i/status/1234567891",
        "桜の美しい景色",
        "https://images.pexels.com/photos/1416530/pexels-photo-1416530.jpeg?auto=compress&cs=tinysrgb&w=300",
        980,
    ),
    (
        "https://twitter.com/i/status/1234567892",
        "おいしい料理のレシピ",
        "https://images.pexels.com/photos/376464/pexels-photo-376464.jpeg?auto=compress&cs=tinysrgb&w=300",
        875,
    ),
    (
        "https://twitter.com/i/status/1234567893",
        "東京の夜景",
        "https://images.pexels.com/photos/2614818/pexels-photo-2614818.jpeg?auto=compress&cs=tinysrgb&w=300",
        756,
    ),
    (
        "https://twitter.com/i/status/1234567894",
        "かわいい子犬",
        "https://images.pexels.com/photos/1108099/pexels-photo-1108099.jpeg?auto=compress&cs=tinysrgb&w=300",
        694,
    ),
];

/// Seeded videos, ids `1..=5`, all created at `now`.
pub fn seed_videos(now: DateTime<Utc>) -> Vec<VideoRecord> {
    SEED_VIDEOS
        .iter()
        .zip(1..)
        .map(|(&(url, title, thumbnail, download_count), id)| VideoRecord {
            id,
            url: url.to_string(),
            title: title.to_string(),
            thumbnail: thumbnail.to_string(),
            download_count,
            created_at: now,
        })
        .collect()
}

/// Seeded blog posts, created at `now`.
pub fn seed_blog_posts(now: DateTime<Utc>) -> Vec<BlogPost> {
    vec![BlogPost {
        id: 1,
        title: "python実装twitterビデオダウンロードコード詳細".to_string(),
        content: DOWNLOADER_ARTICLE.to_string(),
        author: "データアナリスト".to_string(),
        created_at: now,
        tags: "ダウンロード,Twitter,動画".to_string(),
    }]
}
