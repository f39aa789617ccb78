//! Tweet URL validation for the simulated download form.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Hosts accepted as Twitter/X.
const TWITTER_HOSTS: &[&str] = &[
    "twitter.com",
    "www.twitter.com",
    "mobile.twitter.com",
    "x.com",
    "www.x.com",
    "mobile.x.com",
];

static STATUS_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/status(?:es)?/(\d+)").unwrap());

/// Errors returned by [`parse_tweet_url`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TweetUrlError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Not a Twitter or X URL: {0}")]
    NotTwitter(String),
}

/// A URL accepted by the download form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetUrl {
    pub url: String,
    /// Numeric id from a `/status/<digits>` path segment, when present.
    pub status_id: Option<String>,
}

/// Validates that `input` is an http(s) URL on a Twitter/X host.
///
/// Host matching is case-insensitive. Any path is accepted; the status id is
/// extracted only when the path contains `status/<digits>`.
///
/// # Errors
///
/// See [`TweetUrlError`].
pub fn parse_tweet_url(input: &str) -> Result<TweetUrl, TweetUrlError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TweetUrlError::Empty);
    }

    let url = Url::parse(input).map_err(|e| TweetUrlError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(TweetUrlError::UnsupportedProtocol);
    }

    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    if !TWITTER_HOSTS.contains(&host.as_str()) {
        return Err(TweetUrlError::NotTwitter(host));
    }

    let status_id = STATUS_ID_REGEX
        .captures(url.path())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    Ok(TweetUrl {
        url: input.to_string(),
        status_id,
    })
}
