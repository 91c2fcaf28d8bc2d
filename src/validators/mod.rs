//! Request validators and validation helpers.

pub mod catalog;
pub mod common;

pub use catalog::*;
pub use common::*;
