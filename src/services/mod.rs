//! Services organized by domain concern.

pub mod catalog_service;
pub mod source_registry;
pub mod upstream;

pub use catalog_service::{CatalogPage, CatalogService};
pub use source_registry::{SourceConfig, SourceConfigError, SourceRegistry};
pub use upstream::{build_upstream_url, CatalogUpstream, ReqwestUpstream};
