//! DTOs for the health endpoint.

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: StorageCheck,
}

/// Result of probing the configured store.
#[derive(Debug, Serialize)]
pub struct StorageCheck {
    /// `ok` or `error`.
    pub status: &'static str,
    /// Store name: `json`, `memory` or `postgres`.
    pub backend: &'static str,
    /// Number of video records, when the store answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<i64>,
    pub message: String,
}

impl StorageCheck {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
