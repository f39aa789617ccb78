//! # Twitter Download Ranking
//!
//! Marketing site for a Twitter video download ranking, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, static content and seed data
//! - **Application Layer** ([`application`]) - Ranking, blog and site services
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file, in-memory and PostgreSQL stores
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered HTML pages
//!
//! ## Features
//!
//! - Top-N video ranking by download count
//! - Download registration with per-URL counters
//! - Markdown blog with share buttons
//! - Simulated download form (no video is ever fetched)
//! - Three interchangeable storage backends
//!
//! ## Quick Start
//!
//! ```bash
//! # Flat JSON file under data/, created on first start
//! export STORAGE_BACKEND=json
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the admin CLI
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BlogService, SiteService, VideoService};
    pub use crate::domain::entities::{BlogPost, NewVideoDownload, SiteRecord, VideoRecord};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{Storage, open_storage};
    pub use crate::state::AppState;
}
