//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthChecks, HealthResponse, StorageCheck};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": {
///       "status": "ok",
///       "backend": "json",
///       "videos": 5,
///       "message": "json store reachable, 5 videos"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let healthy = storage.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { storage },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Pings the store and counts videos.
async fn check_storage(state: &AppState) -> StorageCheck {
    let backend = state.storage.name();

    let result = match state.storage.ping().await {
        Ok(()) => state.video_service.count().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(count) => StorageCheck {
            status: "ok",
            backend,
            videos: Some(count),
            message: format!("{backend} store reachable, {count} videos"),
        },
        Err(e) => {
            tracing::warn!(backend, error = %e, "Storage health check failed");
            StorageCheck {
                status: "error",
                backend,
                videos: None,
                message: format!("{backend} store error: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockBlogRepository, MockStorageBackend, MockVideoRepository,
    };
    use crate::error::AppError;
    use crate::infrastructure::persistence::Storage;
    use serde_json::json;
    use std::sync::Arc;

    fn state(backend: MockStorageBackend, videos: MockVideoRepository) -> AppState {
        AppState::new(
            Storage {
                videos: Arc::new(videos),
                blog: Arc::new(MockBlogRepository::new()),
                backend: Arc::new(backend),
            },
            "http://localhost:3000",
        )
    }

    #[tokio::test]
    async fn test_health_reports_backend_and_count() {
        let mut backend = MockStorageBackend::new();
        backend.expect_name().return_const("postgres");
        backend.expect_ping().times(1).returning(|| Ok(()));

        let mut videos = MockVideoRepository::new();
        videos.expect_count().times(1).returning(|| Ok(42));

        let Json(response) = health_handler(State(state(backend, videos)))
            .await
            .unwrap();

        assert_eq!(response.status, "healthy");
        assert_eq!(response.checks.storage.backend, "postgres");
        assert_eq!(response.checks.storage.videos, Some(42));
        assert_eq!(
            response.checks.storage.message,
            "postgres store reachable, 42 videos"
        );
    }

    #[tokio::test]
    async fn test_health_skips_count_when_ping_fails() {
        let mut backend = MockStorageBackend::new();
        backend.expect_name().return_const("postgres");
        backend
            .expect_ping()
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let mut videos = MockVideoRepository::new();
        videos.expect_count().never();

        let (status, Json(response)) = health_handler(State(state(backend, videos)))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.status, "degraded");
        assert_eq!(response.checks.storage.status, "error");
        assert!(response.checks.storage.videos.is_none());
    }
}
