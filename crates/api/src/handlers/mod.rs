//! Request handlers.
//!
//! Handlers delegate to the repositories in `nativequery_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod sales;
