use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use promptlab_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`] so every REST
/// failure is a structured JSON body with the same code the GraphQL
/// surface uses; the error kind is never altered on the way out.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Core(core) = self;

        let status = match &core {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CoreError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        let body = json!({
            "error": core.message(),
            "code": core.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}
