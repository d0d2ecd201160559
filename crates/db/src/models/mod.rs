//! Row models and write DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - An update DTO (all `Option` fields) for patches, where the entity
//!   supports them

pub mod category;
pub mod grocery_item;
