//! Business logic services for the application layer.

pub mod blog_service;
pub mod site_service;
pub mod video_service;

pub use blog_service::{BlogService, RenderedPost};
pub use site_service::SiteService;
pub use video_service::VideoService;
