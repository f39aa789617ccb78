//! Application layer services implementing business logic.
//!
//! Services validate input, call the repository traits from the domain
//! layer and hand plain entities back to HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::video_service::VideoService`] - Video ranking and download registration
//! - [`services::blog_service::BlogService`] - Blog listing and rendering
//! - [`services::site_service::SiteService`] - Curated ranking-site catalogue

pub mod services;
