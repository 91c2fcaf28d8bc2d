//! Catalog request models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_START};
use crate::validators::validate_category_id;

/// Query string accepted by `GET /api/{source}`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CatalogQuery {
    /// Items per page (default: 20, max: 100)
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
    /// Offset of the first item (default: 0)
    pub start: Option<u32>,
    /// Upstream category id
    #[validate(custom(function = "validate_category_id"))]
    pub t: Option<String>,
}

impl CatalogQuery {
    /// Apply defaults; call after validation.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest {
            limit: self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            start: self.start.unwrap_or(DEFAULT_PAGE_START),
            category: self.t.unwrap_or_default(),
        }
    }
}

/// One page of a catalog, addressed by item offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u32,
    pub start: u32,
    #[serde(default)]
    pub category: String,
}

impl PageRequest {
    pub fn new(limit: u32, start: u32, category: impl Into<String>) -> Self {
        Self {
            limit,
            start,
            category: category.into(),
        }
    }

    /// Request for the `index`-th page (zero based) of `limit` items.
    pub fn nth(index: u32, limit: u32, category: impl Into<String>) -> Self {
        Self::new(limit, index.saturating_mul(limit), category)
    }

    /// One-based page number understood by the upstream API.
    ///
    /// `start` is floored to the page that contains it.
    pub fn upstream_page(&self) -> u32 {
        self.start / self.limit.max(1) + 1
    }

    /// Whether `start` falls exactly on a page boundary.
    pub fn is_aligned(&self) -> bool {
        self.start % self.limit.max(1) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_PAGE_LIMIT;

    #[test]
    fn test_upstream_page_for_aligned_offsets() {
        for limit in 1..=50u32 {
            for k in 0..10u32 {
                let req = PageRequest::new(limit, k * limit, "");
                assert_eq!(req.upstream_page(), k + 1, "limit={} start={}", limit, k * limit);
                assert!(req.is_aligned());
            }
        }
    }

    #[test]
    fn test_upstream_page_floors_misaligned_offsets() {
        let req = PageRequest::new(20, 35, "");
        assert_eq!(req.upstream_page(), 2);
        assert!(!req.is_aligned());
    }

    #[test]
    fn test_query_defaults() {
        let req = CatalogQuery::default().into_page_request();
        assert_eq!(req, PageRequest::new(20, 0, ""));
        assert_eq!(req.upstream_page(), 1);
    }

    #[test]
    fn test_query_validation() {
        let ok = CatalogQuery {
            limit: Some(25),
            start: Some(50),
            t: Some("13".to_string()),
        };
        assert!(ok.validate().is_ok());

        let zero = CatalogQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let too_large = CatalogQuery {
            limit: Some(MAX_PAGE_LIMIT + 1),
            ..Default::default()
        };
        assert!(too_large.validate().is_err());

        let bad_category = CatalogQuery {
            t: Some("1&pg=9".to_string()),
            ..Default::default()
        };
        assert!(bad_category.validate().is_err());
    }

    #[test]
    fn test_nth_page_offsets() {
        assert_eq!(PageRequest::nth(0, 25, "").start, 0);
        assert_eq!(PageRequest::nth(3, 25, "").start, 75);
    }
}
