use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The primary error type for request handling.
///
/// Failures stay at the request boundary: a handler returning `AppError`
/// produces a response for that client only, and the process keeps serving.
#[derive(Debug, Error)]
pub enum AppError {
    /// No catalog entry matches the request, or the resolved file is gone.
    #[error("Not found")]
    NotFound,
    /// For internal errors that are not expected to be handled by the client.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
    /// For errors related to I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::Internal(err) => {
                let error_id = uuid::Uuid::new_v4();
                tracing::error!("Internal error {}: {:?}", error_id, err);
                (StatusCode::SERVICE_UNAVAILABLE, format!("Internal error: {}", err))
                    .into_response()
            }
            AppError::Io(err) => {
                let error_id = uuid::Uuid::new_v4();
                tracing::error!("I/O error {}: {}", error_id, err);
                (StatusCode::SERVICE_UNAVAILABLE, format!("Internal error: {}", err))
                    .into_response()
            }
        }
    }
}

/// A type alias for `Result<T, AppError>`, used by the request handlers.
pub type AppResult<T> = Result<T, AppError>;
