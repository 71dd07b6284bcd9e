//! Paginated listings as returned by the backend.

use serde::{Deserialize, Serialize};

/// Default page size when the caller doesn't pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One page of a server-side paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// Check the shape the server promises: the content fits in `size`, and
    /// the page number is in range unless this is the last page.
    pub fn is_consistent(&self) -> bool {
        self.content.len() <= self.size as usize && (self.number < self.total_pages || self.last)
    }

    pub fn has_next(&self) -> bool {
        !self.last
    }

    pub fn has_previous(&self) -> bool {
        !self.first
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Pagination parameters for listing calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: None,
        }
    }
}

impl PageRequest {
    /// Page `page` with `size` items. A size of zero falls back to the default.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: if size == 0 { DEFAULT_PAGE_SIZE } else { size },
            sort_by: None,
        }
    }

    pub fn sorted_by(mut self, key: impl Into<String>) -> Self {
        self.sort_by = Some(key.into());
        self
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(len: usize, size: u32, number: u32, total_pages: u32, last: bool) -> Page<u8> {
        Page {
            content: vec![0; len],
            total_elements: u64::from(total_pages) * u64::from(size),
            total_pages,
            size,
            number,
            first: number == 0,
            last,
        }
    }

    #[test]
    fn test_spring_page_json() {
        let json = serde_json::json!({
            "content": [1, 2],
            "totalElements": 12,
            "totalPages": 2,
            "size": 10,
            "number": 1,
            "first": false,
            "last": true,
            "pageable": {"offset": 10}
        });
        let page: Page<u8> = serde_json::from_value(json).unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.total_elements, 12);
        assert!(page.is_consistent());
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_consistency_rules() {
        assert!(page(10, 10, 0, 3, false).is_consistent());
        assert!(!page(11, 10, 0, 3, false).is_consistent());
        assert!(!page(0, 10, 3, 3, false).is_consistent());
        // An empty collection reports zero pages but is still the last one
        assert!(page(0, 10, 0, 0, true).is_consistent());
    }

    #[test]
    fn test_page_request_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 10);
        assert_eq!(request.sort_by, None);
        assert_eq!(PageRequest::new(2, 0).size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_request_navigation() {
        let request = PageRequest::new(0, 5).sorted_by("nome");
        assert_eq!(request.previous().page, 0);
        assert_eq!(request.next().page, 1);
        assert_eq!(request.next().sort_by.as_deref(), Some("nome"));
    }
}
