//! Application constants module.
//!
//! This module centralizes all constant strings used throughout the application,
//! including error messages, success messages, error codes, paging defaults and
//! the built-in upstream sources.

pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod pagination;
pub mod sources;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
pub use sources::*;
