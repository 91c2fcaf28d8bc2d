//! Error message constants used throughout the application.

// Catalog errors
pub const ERR_CATALOG_FETCH_FAILED: &str = "Failed to fetch catalog data";
pub const ERR_UNKNOWN_SOURCE: &str = "Unknown catalog source";

// Validation errors
pub const ERR_INVALID_CATEGORY: &str = "t must be a numeric category id";
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";

// Controller errors
pub const ERR_PAGE_REJECTED: &str = "Catalog page request was rejected";
