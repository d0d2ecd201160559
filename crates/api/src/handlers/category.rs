//! Handlers for categories.

use grocery_core::error::CoreError;
use grocery_core::schema::{CreateCategoryInput, DeleteInput, GetByIdInput, UpdateCategoryInput};
use grocery_db::models::category::Category;
use grocery_db::repositories::CategoryRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;

/// createCategory
pub async fn create_category(pool: &PgPool, input: CreateCategoryInput) -> AppResult<Category> {
    let category = CategoryRepo::create(pool, &input.name).await?;
    tracing::info!(category_id = category.id, "Category created");
    Ok(category)
}

/// getCategories
pub async fn list_categories(pool: &PgPool) -> AppResult<Vec<Category>> {
    Ok(CategoryRepo::list(pool).await?)
}

/// getCategoryById
pub async fn get_category_by_id(pool: &PgPool, input: GetByIdInput) -> AppResult<Category> {
    CategoryRepo::find_by_id(pool, input.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: input.id,
        }))
}

/// updateCategory
///
/// Replaces the name of an existing category; never creates one.
pub async fn update_category(pool: &PgPool, input: UpdateCategoryInput) -> AppResult<Category> {
    let category = CategoryRepo::update(pool, input.id, &input.name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: input.id,
        }))?;
    tracing::info!(category_id = category.id, "Category updated");
    Ok(category)
}

/// deleteCategory
///
/// Succeeds whether or not the category existed. Items that reference it
/// are not touched.
pub async fn delete_category(pool: &PgPool, input: DeleteInput) -> AppResult<SuccessResponse> {
    let deleted = CategoryRepo::delete(pool, input.id).await?;
    tracing::info!(category_id = input.id, deleted, "Category delete requested");
    Ok(SuccessResponse::OK)
}
