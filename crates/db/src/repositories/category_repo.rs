//! Repository for the `categories` table.

use grocery_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new category, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Replace a category's name. Returns `None` if no row has that ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    ///
    /// Items referencing the category are left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
