//! Server-rendered HTML pages.
//!
//! Uses Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`views`] - Display-ready view models built from entities
//! - [`error`] - HTML error pages
//! - [`routes`] - Page route configuration

pub mod error;
pub mod handlers;
pub mod routes;
pub mod views;
