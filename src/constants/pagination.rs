//! Pagination constants for catalog endpoints and the list controller.

/// Default number of items per page when not specified in the request.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Maximum allowed items per page to prevent excessive data retrieval.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Default offset when not specified in the request.
pub const DEFAULT_PAGE_START: u32 = 0;

/// Number of placeholder cells rendered during the initial load.
pub const SKELETON_CELL_COUNT: usize = 25;

/// Fraction of the sentinel that must be visible to count as intersecting.
pub const SENTINEL_THRESHOLD: f32 = 0.1;
