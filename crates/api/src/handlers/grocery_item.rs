//! Handlers for grocery items.

use grocery_core::error::CoreError;
use grocery_core::schema::{
    CreateGroceryItemInput, DeleteInput, GetByIdInput, UpdateGroceryItemInput,
};
use grocery_core::types::DbId;
use grocery_db::models::grocery_item::{GroceryItem, UpdateGroceryItem};
use grocery_db::repositories::GroceryItemRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;

/// createGroceryItem
///
/// Fails with [`CoreError::ConstraintViolation`] when `category_id` does
/// not name an existing category; nothing is written in that case.
pub async fn create_grocery_item(
    pool: &PgPool,
    input: CreateGroceryItemInput,
) -> AppResult<GroceryItem> {
    let item = GroceryItemRepo::create(pool, &input.name, input.category_id)
        .await
        .map_err(|err| category_reference_error(err, input.category_id))?;
    tracing::info!(
        item_id = item.id,
        category_id = item.category_id,
        "Grocery item created"
    );
    Ok(item)
}

/// getGroceryItems
pub async fn list_grocery_items(pool: &PgPool) -> AppResult<Vec<GroceryItem>> {
    Ok(GroceryItemRepo::list(pool).await?)
}

/// getGroceryItemById
pub async fn get_grocery_item_by_id(pool: &PgPool, input: GetByIdInput) -> AppResult<GroceryItem> {
    GroceryItemRepo::find_by_id(pool, input.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GroceryItem",
            id: input.id,
        }))
}

/// updateGroceryItem
///
/// Writes only the fields present in `input`. An input naming no field
/// issues no write and returns the stored row.
pub async fn update_grocery_item(
    pool: &PgPool,
    input: UpdateGroceryItemInput,
) -> AppResult<GroceryItem> {
    if input.is_empty() {
        tracing::debug!(item_id = input.id, "Grocery item update names no fields");
        return get_grocery_item_by_id(pool, GetByIdInput { id: input.id }).await;
    }

    let id = input.id;
    let category_id = input.category_id;
    let patch = UpdateGroceryItem {
        name: input.name,
        category_id: input.category_id,
        purchased: input.purchased,
    };

    let item = GroceryItemRepo::update(pool, id, &patch)
        .await
        .map_err(|err| match category_id {
            Some(category_id) => category_reference_error(err, category_id),
            None => err.into(),
        })?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GroceryItem",
            id,
        }))?;

    tracing::info!(
        item_id = item.id,
        purchased = item.purchased,
        "Grocery item updated"
    );
    Ok(item)
}

/// deleteGroceryItem
///
/// Succeeds whether or not the item existed.
pub async fn delete_grocery_item(pool: &PgPool, input: DeleteInput) -> AppResult<SuccessResponse> {
    let deleted = GroceryItemRepo::delete(pool, input.id).await?;
    tracing::info!(item_id = input.id, deleted, "Grocery item delete requested");
    Ok(SuccessResponse::OK)
}

/// Turn a foreign key violation on `category_id` into a domain error.
fn category_reference_error(err: sqlx::Error, category_id: DbId) -> AppError {
    if grocery_db::is_foreign_key_violation(&err) {
        CoreError::ConstraintViolation(format!("Category with id {category_id} does not exist"))
            .into()
    } else {
        err.into()
    }
}
