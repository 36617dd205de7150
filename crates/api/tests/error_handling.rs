//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no HTTP server
//! or database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use nativequery_api::error::AppError;
use nativequery_core::error::CoreError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("size must be at least 1, got 0".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "size must be at least 1, got 0");
}

#[tokio::test]
async fn unsupported_filter_key_returns_400() {
    let err = AppError::Core(CoreError::UnsupportedFilterKey("x.secret".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNSUPPORTED_FILTER_KEY");
    assert_eq!(json["error"], "Filter key 'x.secret' is not supported");
}

#[tokio::test]
async fn row_not_found_is_a_data_access_error() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "DATA_ACCESS_ERROR");
    assert_eq!(json["error"], "A data access error occurred");
}

#[tokio::test]
async fn pool_timeout_returns_503() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "DATA_SOURCE_UNAVAILABLE");
}

#[tokio::test]
async fn closed_pool_returns_503() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolClosed)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "DATA_SOURCE_UNAVAILABLE");
}

#[tokio::test]
async fn io_error_returns_503() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");

    let (status, json) = error_to_response(AppError::Database(sqlx::Error::Io(io))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "DATA_SOURCE_UNAVAILABLE");
}

#[tokio::test]
async fn other_database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::Protocol("secret connection details".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "DATA_ACCESS_ERROR");
    assert_eq!(json["error"], "A data access error occurred");
    assert!(!json["error"].as_str().unwrap().contains("secret"));
}
