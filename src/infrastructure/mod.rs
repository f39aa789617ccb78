//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - JSON file, in-memory and PostgreSQL stores

pub mod persistence;
