//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`VideoRepository`] - Video ranking and download counting
//! - [`BlogRepository`] - Blog post lookups
//! - [`StorageBackend`] - Health checks and fixture resets

pub mod blog_repository;
pub mod storage_backend;
pub mod video_repository;

pub use blog_repository::BlogRepository;
pub use storage_backend::StorageBackend;
pub use video_repository::VideoRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use storage_backend::MockStorageBackend;
#[cfg(test)]
pub use video_repository::MockVideoRepository;
