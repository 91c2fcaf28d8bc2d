//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";

// Catalog errors
pub const CODE_SOURCE_NOT_FOUND: &str = "SOURCE_NOT_FOUND";
