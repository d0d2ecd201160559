//! Procedure registry and name-based dispatch.
//!
//! Every remote operation is a [`Procedure`]. The HTTP layer resolves the
//! name from the path, then [`dispatch`] parses the raw JSON input against
//! the procedure's schema and runs the matching handler.

use std::str::FromStr;

use grocery_core::error::CoreError;
use grocery_core::schema::parse_input;
use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::{category, grocery_item, health};

/// Whether a procedure reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    /// Read-only; callable over GET or POST.
    Query,
    /// Writes; callable over POST only.
    Mutation,
}

/// Every procedure exposed over `/rpc/{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    Healthcheck,
    CreateCategory,
    GetCategories,
    GetCategoryById,
    UpdateCategory,
    DeleteCategory,
    CreateGroceryItem,
    GetGroceryItems,
    GetGroceryItemById,
    UpdateGroceryItem,
    DeleteGroceryItem,
}

impl Procedure {
    pub const ALL: [Procedure; 11] = [
        Procedure::Healthcheck,
        Procedure::CreateCategory,
        Procedure::GetCategories,
        Procedure::GetCategoryById,
        Procedure::UpdateCategory,
        Procedure::DeleteCategory,
        Procedure::CreateGroceryItem,
        Procedure::GetGroceryItems,
        Procedure::GetGroceryItemById,
        Procedure::UpdateGroceryItem,
        Procedure::DeleteGroceryItem,
    ];

    /// Wire name, as it appears in the request path.
    pub fn name(self) -> &'static str {
        match self {
            Procedure::Healthcheck => "healthcheck",
            Procedure::CreateCategory => "createCategory",
            Procedure::GetCategories => "getCategories",
            Procedure::GetCategoryById => "getCategoryById",
            Procedure::UpdateCategory => "updateCategory",
            Procedure::DeleteCategory => "deleteCategory",
            Procedure::CreateGroceryItem => "createGroceryItem",
            Procedure::GetGroceryItems => "getGroceryItems",
            Procedure::GetGroceryItemById => "getGroceryItemById",
            Procedure::UpdateGroceryItem => "updateGroceryItem",
            Procedure::DeleteGroceryItem => "deleteGroceryItem",
        }
    }

    pub fn kind(self) -> ProcedureKind {
        match self {
            Procedure::Healthcheck
            | Procedure::GetCategories
            | Procedure::GetCategoryById
            | Procedure::GetGroceryItems
            | Procedure::GetGroceryItemById => ProcedureKind::Query,
            Procedure::CreateCategory
            | Procedure::UpdateCategory
            | Procedure::DeleteCategory
            | Procedure::CreateGroceryItem
            | Procedure::UpdateGroceryItem
            | Procedure::DeleteGroceryItem => ProcedureKind::Mutation,
        }
    }
}

impl FromStr for Procedure {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Procedure::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| AppError::UnknownProcedure(s.to_string()))
    }
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `procedure` with the raw JSON `input`.
///
/// Procedures without input ignore it. For the rest a missing input is
/// treated as `null` and rejected by the schema.
pub async fn dispatch(pool: &PgPool, procedure: Procedure, input: Option<Value>) -> AppResult<Value> {
    tracing::debug!(procedure = %procedure, "Dispatching procedure");

    let input = input.unwrap_or(Value::Null);
    match procedure {
        Procedure::Healthcheck => to_value(health::healthcheck()),

        Procedure::CreateCategory => {
            to_value(category::create_category(pool, parse_input(input)?).await?)
        }
        Procedure::GetCategories => to_value(category::list_categories(pool).await?),
        Procedure::GetCategoryById => {
            to_value(category::get_category_by_id(pool, parse_input(input)?).await?)
        }
        Procedure::UpdateCategory => {
            to_value(category::update_category(pool, parse_input(input)?).await?)
        }
        Procedure::DeleteCategory => {
            to_value(category::delete_category(pool, parse_input(input)?).await?)
        }

        Procedure::CreateGroceryItem => {
            to_value(grocery_item::create_grocery_item(pool, parse_input(input)?).await?)
        }
        Procedure::GetGroceryItems => to_value(grocery_item::list_grocery_items(pool).await?),
        Procedure::GetGroceryItemById => {
            to_value(grocery_item::get_grocery_item_by_id(pool, parse_input(input)?).await?)
        }
        Procedure::UpdateGroceryItem => {
            to_value(grocery_item::update_grocery_item(pool, parse_input(input)?).await?)
        }
        Procedure::DeleteGroceryItem => {
            to_value(grocery_item::delete_grocery_item(pool, parse_input(input)?).await?)
        }
    }
}

fn to_value<T: Serialize>(output: T) -> AppResult<Value> {
    serde_json::to_value(output)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Failed to encode output: {e}"))))
}
