//! Repository for the `grocery_items` table.

use grocery_core::types::DbId;
use sqlx::PgPool;

use crate::models::grocery_item::{GroceryItem, UpdateGroceryItem};

/// Column list for grocery_items queries.
const COLUMNS: &str = "id, name, category_id, purchased, created_at";

/// Provides CRUD operations for grocery items.
pub struct GroceryItemRepo;

impl GroceryItemRepo {
    /// List all grocery items in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<GroceryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grocery_items ORDER BY id ASC");
        sqlx::query_as::<_, GroceryItem>(&query).fetch_all(pool).await
    }

    /// Find a grocery item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GroceryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grocery_items WHERE id = $1");
        sqlx::query_as::<_, GroceryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new, unpurchased grocery item.
    ///
    /// Fails with a foreign key violation (SQLSTATE 23503) when
    /// `category_id` does not name an existing category.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        category_id: DbId,
    ) -> Result<GroceryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO grocery_items (name, category_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GroceryItem>(&query)
            .bind(name)
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update, returning the updated row.
    ///
    /// Only the fields set in `input` are written. Returns `None` if no row
    /// has that ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGroceryItem,
    ) -> Result<Option<GroceryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE grocery_items SET
                name = COALESCE($2, name),
                category_id = COALESCE($3, category_id),
                purchased = COALESCE($4, purchased)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GroceryItem>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.category_id)
            .bind(input.purchased)
            .fetch_optional(pool)
            .await
    }

    /// Delete a grocery item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM grocery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
