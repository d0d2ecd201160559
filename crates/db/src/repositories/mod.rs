//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod grocery_item_repo;

pub use category_repo::CategoryRepo;
pub use grocery_item_repo::GroceryItemRepo;
