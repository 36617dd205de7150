#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unsupported filter key: {0}")]
    UnsupportedFilterKey(String),
}
