//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod sale_query_repo;

pub use sale_query_repo::SaleQueryRepo;
