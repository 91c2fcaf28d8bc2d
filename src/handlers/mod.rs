//! HTTP request handlers organized by domain.

pub mod catalog_handler;

pub use catalog_handler::*;
