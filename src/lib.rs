//! Paginated video-catalog proxy and the infinite list that consumes it.

pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod pager;
pub mod routes;
pub mod services;
pub mod validators;
