//! Helpers shared by the API, web pages and the admin CLI.
//!
//! - [`markdown`] - Blog post rendering
//! - [`tweet_url`] - Tweet URL validation and status id extraction
//! - [`share`] - Social share links for blog posts
//! - [`format`] - Display formatting for counts, dates and rank badges

pub mod format;
pub mod markdown;
pub mod share;
pub mod tweet_url;
