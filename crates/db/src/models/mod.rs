//! Row models and request DTOs.
//!
//! Row structs derive `FromRow` for the repository layer and `Serialize`
//! with camelCase keys for the HTTP layer.

pub mod sale;
