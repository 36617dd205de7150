//! Query-string parameter types for API handlers.

use nativequery_core::error::CoreError;
use nativequery_core::paging::{PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use serde::Deserialize;

/// Zero-based paging parameters (`?page=&size=`).
///
/// Missing values fall back to page `0` and size `5`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    /// Validate into a [`PageRequest`].
    pub fn to_page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}
