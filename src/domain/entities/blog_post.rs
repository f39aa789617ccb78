//! Blog post entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A static article rendered as markdown or raw HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Comma-separated tag string, e.g. `"ダウンロード,Twitter,動画"`.
    pub tags: String,
}

impl BlogPost {
    /// Splits the tag string into trimmed, non-empty tags.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_tags(tags: &str) -> BlogPost {
        BlogPost {
            id: 1,
            title: "t".to_string(),
            content: String::new(),
            author: "a".to_string(),
            created_at: Utc::now(),
            tags: tags.to_string(),
        }
    }

    #[test]
    fn test_tag_list_trims_and_skips_empty() {
        let post = post_with_tags(" ダウンロード, Twitter ,,動画 ");
        assert_eq!(post.tag_list(), vec!["ダウンロード", "Twitter", "動画"]);
    }

    #[test]
    fn test_tag_list_empty() {
        assert!(post_with_tags("").tag_list().is_empty());
    }
}
