//! Page requests and the page envelope returned by paged listings.
//!
//! Pages are zero-based. The envelope mirrors the shape clients of the
//! sales API already consume: `content` plus `totalElements`, `totalPages`
//! and position flags.

use serde::Serialize;

use crate::error::CoreError;

/// Page number used when the client does not supply one.
pub const DEFAULT_PAGE: i64 = 0;

/// Page size used when the client does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Larger requested sizes are clamped to this value.
pub const MAX_PAGE_SIZE: i64 = 2000;

/// A validated, zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    /// Build a page request.
    ///
    /// Rejects a negative page number and a size below one. Sizes above
    /// [`MAX_PAGE_SIZE`] are clamped rather than rejected.
    pub fn new(page: i64, size: i64) -> Result<Self, CoreError> {
        if page < 0 {
            return Err(CoreError::Validation(format!(
                "page must be zero or greater, got {page}"
            )));
        }
        if size < 1 {
            return Err(CoreError::Validation(format!(
                "size must be at least 1, got {size}"
            )));
        }

        Ok(Self {
            page,
            size: size.min(MAX_PAGE_SIZE),
        })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Row offset of the first element on this page.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus total-count metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: i64,
    pub size: i64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Assemble a page from its content, the request that produced it and
    /// the total number of matching rows.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        let total_elements = total_elements.max(0);
        let total_pages = total_pages(total_elements, request.size());

        Self {
            number_of_elements: content.len(),
            empty: content.is_empty(),
            first: request.page() == 0,
            last: request.page().saturating_add(1) >= total_pages,
            content,
            total_elements,
            total_pages,
            number: request.page(),
            size: request.size(),
        }
    }
}

/// Number of pages needed to hold `total_elements` rows at `size` per page.
fn total_pages(total_elements: i64, size: i64) -> i64 {
    if size <= 0 {
        return 1;
    }
    total_elements / size + i64::from(total_elements % size != 0)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_request_is_first_page_of_five() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 0);
        assert_eq!(req.size(), 5);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn offset_is_page_times_size() {
        let req = PageRequest::new(3, 5).unwrap();
        assert_eq!(req.offset(), 15);
    }

    #[test]
    fn negative_page_is_rejected() {
        assert_matches!(PageRequest::new(-1, 5), Err(CoreError::Validation(_)));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_matches!(PageRequest::new(0, 0), Err(CoreError::Validation(_)));
        assert_matches!(PageRequest::new(0, -4), Err(CoreError::Validation(_)));
    }

    #[test]
    fn oversized_request_is_clamped() {
        let req = PageRequest::new(0, 1_000_000).unwrap();
        assert_eq!(req.size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(i64::MAX, 1), i64::MAX);
    }

    #[test]
    fn middle_page_is_neither_first_nor_last() {
        let page = Page::new(vec![1, 2, 3, 4, 5], PageRequest::new(1, 5).unwrap(), 12);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number_of_elements, 5);
        assert!(!page.first);
        assert!(!page.last);
        assert!(!page.empty);
    }

    #[test]
    fn page_past_the_end_is_empty_and_last() {
        let page: Page<i32> = Page::new(Vec::new(), PageRequest::new(9, 5).unwrap(), 7);
        assert!(page.empty);
        assert!(page.last);
        assert_eq!(page.total_elements, 7);
    }

    #[test]
    fn largest_page_number_is_last_without_overflow() {
        let request = PageRequest::new(i64::MAX, 5).unwrap();
        assert_eq!(request.offset(), i64::MAX);

        let page: Page<i32> = Page::new(Vec::new(), request, 8);
        assert!(page.last);
        assert!(!page.first);
        assert_eq!(page.number, i64::MAX);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn envelope_serializes_in_camel_case() {
        let page = Page::new(vec!["a"], PageRequest::default(), 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["content"], serde_json::json!(["a"]));
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["numberOfElements"], 1);
        assert_eq!(json["first"], true);
        assert_eq!(json["last"], true);
    }
}
