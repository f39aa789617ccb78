//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod blog;
pub mod health;
pub mod videos;

pub use blog::{blog_handler, blog_post_handler};
pub use health::health_handler;
pub use videos::{record_download_handler, top_videos_handler};
