//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`content`] - Static page content (FAQ, precautions, ranking sites)
//! - [`fixtures`] - Seed data loaded into every fresh store
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Services in [`crate::application::services`] consume the
//! repository traits defined here.

pub mod content;
pub mod entities;
pub mod fixtures;
pub mod repositories;
