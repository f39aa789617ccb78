//! Core domain entities.
//!
//! - [`VideoRecord`] - A downloadable video and its download counter
//! - [`BlogPost`] - A static blog article
//! - [`SiteRecord`] - A curated third-party ranking site
//!
//! Creation inputs live next to their entity ([`NewVideoDownload`]).

pub mod blog_post;
pub mod site;
pub mod video;

pub use blog_post::BlogPost;
pub use site::SiteRecord;
pub use video::{DownloadOutcome, NewVideoDownload, VideoRecord};
