//! Domain types shared by the storage and API crates.
//!
//! Holds the id/timestamp aliases, the error taxonomy every layer reports
//! in, and the input schema that gates all writes.

pub mod error;
pub mod schema;
pub mod types;
