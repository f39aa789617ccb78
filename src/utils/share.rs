//! Social share links for blog posts.

use serde::Serialize;
use url::form_urlencoded::byte_serialize;

/// Suffix appended to the post title in share text.
pub const SHARE_SUFFIX: &str = "Twitter動画ダウンローダー";

/// One share button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub network: &'static str,
    pub label: &'static str,
    pub href: String,
}

/// Canonical public URL of a blog post.
pub fn post_url(site_url: &str, post_id: i64) -> String {
    format!("{}/blog/{}", site_url.trim_end_matches('/'), post_id)
}

/// Builds the Twitter, Facebook, LINE and Hatena share links for a post.
///
/// Both the page URL and the share text are form-encoded into the query
/// string.
pub fn share_links(site_url: &str, post_id: i64, title: &str) -> Vec<ShareLink> {
    let url = encode(&post_url(site_url, post_id));
    let text = encode(&format!("{title} - {SHARE_SUFFIX}"));

    vec![
        ShareLink {
            network: "twitter",
            label: "Twitter",
            href: format!("https://twitter.com/intent/tweet?url={url}&text={text}"),
        },
        ShareLink {
            network: "facebook",
            label: "Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        },
        ShareLink {
            network: "line",
            label: "LINE",
            href: format!("https://social-plugins.line.me/lineit/share?url={url}&text={text}"),
        },
        ShareLink {
            network: "hatena",
            label: "はてブ",
            href: format!("https://b.hatena.ne.jp/entry/panel/?url={url}&title={text}"),
        },
    ]
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url_trims_trailing_slash() {
        assert_eq!(
            post_url("https://ranking.example.jp/", 3),
            "https://ranking.example.jp/blog/3"
        );
    }

    #[test]
    fn test_share_links_are_percent_encoded() {
        let links = share_links("http://localhost:3000", 1, "A&B");

        assert_eq!(links.len(), 4);
        let twitter = &links[0];
        assert_eq!(
            twitter.href,
            "https://twitter.com/intent/tweet?url=http%3A%2F%2Flocalhost%3A3000%2Fblog%2F1\
             &text=A%26B+-+Twitter%E5%8B%95%E7%94%BB%E3%83%80%E3%82%A6%E3%83%B3%E3%83%AD%E3%83%BC%E3%83%80%E3%83%BC"
        );
        assert!(links.iter().all(|l| !l.href.contains(' ')));
    }

    #[test]
    fn test_each_network_uses_its_endpoint() {
        let links = share_links("https://s.example.jp", 7, "t");
        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();

        assert!(hrefs[1].starts_with("https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fs.example.jp%2Fblog%2F7"));
        assert!(hrefs[2].starts_with("https://social-plugins.line.me/lineit/share?url="));
        assert!(hrefs[3].starts_with("https://b.hatena.ne.jp/entry/panel/?url="));
        assert!(hrefs[3].contains("&title=t+-+"));
    }
}
