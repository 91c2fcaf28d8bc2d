//! Data models organized by type.

pub mod item;
pub mod requests;
pub mod responses;
pub mod upstream;

pub use item::Item;
pub use requests::{CatalogQuery, PageRequest};
pub use responses::{CatalogResult, ErrorResponse, HealthResponse, UpstreamFailureResponse};
pub use upstream::{UpstreamId, UpstreamPage, UpstreamRecord};
