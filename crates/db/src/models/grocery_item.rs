//! Grocery item model.

use grocery_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `grocery_items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GroceryItem {
    pub id: DbId,
    pub name: String,
    pub category_id: DbId,
    pub purchased: bool,
    pub created_at: Timestamp,
}

/// Partial update for a grocery item. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGroceryItem {
    pub name: Option<String>,
    pub category_id: Option<DbId>,
    pub purchased: Option<bool>,
}
