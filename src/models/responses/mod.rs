//! Response models for API endpoints.

pub mod api;
pub mod catalog;

pub use api::*;
pub use catalog::*;
