//! JSON API layer.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extractors`] - Body and query extractors with JSON error rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and rate limiting layers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
