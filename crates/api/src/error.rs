use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nativequery_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for data-access
/// failures.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `nativequery_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A data-access error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::UnsupportedFilterKey(key) => (
                    StatusCode::BAD_REQUEST,
                    "UNSUPPORTED_FILTER_KEY",
                    format!("Filter key '{key}' is not supported"),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - An unreachable store (pool timeout, closed pool, I/O, TLS) maps to 503.
/// - Everything else, including malformed statements, maps to 500 with a
///   sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => {
            tracing::error!(error = %err, "Data source unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "DATA_SOURCE_UNAVAILABLE",
                "The data source is unavailable".to_string(),
            )
        }
        sqlx::Error::Database(db_err) => {
            tracing::error!(
                error = %db_err,
                sqlstate = db_err.code().as_deref().unwrap_or("unknown"),
                "Database error",
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATA_ACCESS_ERROR",
                "A data access error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATA_ACCESS_ERROR",
                "A data access error occurred".to_string(),
            )
        }
    }
}
