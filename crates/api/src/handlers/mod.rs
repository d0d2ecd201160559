//! Procedure handlers.
//!
//! One async function per use case. Each takes the pool explicitly plus an
//! input that has already passed the schema in [`grocery_core::schema`],
//! calls the storage gateway and maps the outcome onto [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod category;
pub mod grocery_item;
pub mod health;
