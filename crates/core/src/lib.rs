//! Shared primitives for the sales query service.
//!
//! Nothing in this crate performs I/O. The repository and HTTP layers both
//! depend on it for id/timestamp aliases, the domain error type, paging math
//! and the SQL-safe filter building blocks.

pub mod error;
pub mod paging;
pub mod sales_filter;
pub mod types;
