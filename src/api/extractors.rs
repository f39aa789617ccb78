//! Extractors that report rejections as [`AppError`] JSON bodies.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// `Json<T>` whose rejection is a 400 validation error.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
        })?;
        Ok(AppJson(value))
    }
}

/// `Query<T>` whose rejection is a 400 validation error.
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::bad_request("Invalid query string", json!({ "reason": e.body_text() }))
            })?;
        Ok(AppQuery(value))
    }
}

/// `Path<T>` whose rejection is a 400 validation error.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::bad_request("Invalid path parameter", json!({ "reason": e.body_text() }))
            })?;
        Ok(AppPath(value))
    }
}
