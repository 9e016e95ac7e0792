//! Input helpers.
//!
//! - employee CSV ingest + validation (`employees`)

pub mod employees;

pub use employees::*;
