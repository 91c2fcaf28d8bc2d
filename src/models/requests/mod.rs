//! Request models for API endpoints.

pub mod catalog;

pub use catalog::*;
