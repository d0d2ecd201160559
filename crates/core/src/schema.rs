//! Input schema for every remote procedure.
//!
//! Each input is deserialized from the raw JSON payload and then checked
//! against its declarative rules by [`parse_input`]. Nothing reaches the
//! storage layer without passing through here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Input for `createCategory`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryInput {
    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,
}

/// Input for `updateCategory`. The name is always replaced in full.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryInput {
    pub id: DbId,
    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Grocery items
// ---------------------------------------------------------------------------

/// Input for `createGroceryItem`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGroceryItemInput {
    #[validate(
        length(min = 1, max = 100, message = "must be between 1 and 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,
    pub category_id: DbId,
}

/// Input for `updateGroceryItem`.
///
/// Every field except `id` is optional; an absent field keeps its stored
/// value. A field that is present must carry a value: `null` is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateGroceryItemInput {
    pub id: DbId,
    #[validate(
        length(min = 1, max = 100, message = "must be between 1 and 100 characters"),
        custom(function = "not_blank")
    )]
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<DbId>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub purchased: Option<bool>,
}

impl UpdateGroceryItemInput {
    /// True when the input names no field to change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category_id.is_none() && self.purchased.is_none()
    }
}

// ---------------------------------------------------------------------------
// Id-only inputs
// ---------------------------------------------------------------------------

/// Input for the `delete*` procedures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct DeleteInput {
    pub id: DbId,
}

/// Input for the `get*ById` procedures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct GetByIdInput {
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Deserialize a raw JSON payload into `T` and run its validation rules.
///
/// Shape errors (missing field, wrong type) and rule failures both surface
/// as [`CoreError::Validation`].
pub fn parse_input<T>(value: serde_json::Value) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate,
{
    let input: T = serde_json::from_value(value)
        .map_err(|e| CoreError::Validation(format!("Invalid input: {e}")))?;
    input
        .validate()
        .map_err(|e| CoreError::Validation(describe_errors(&e)))?;
    Ok(input)
}

/// Deserialize an optional field that, when present, must not be `null`.
///
/// Paired with `#[serde(default)]`, which covers the absent case.
fn present_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Reject names made only of whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Flatten field errors into `field: message` pairs, sorted for stable output.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", err.code),
            })
        })
        .collect();
    parts.sort();
    parts.dedup();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn validation_message(err: CoreError) -> String {
        match err {
            CoreError::Validation(msg) => msg,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_category_accepts_bounded_name() {
        let input: CreateCategoryInput = parse_input(json!({ "name": "Fruits" })).unwrap();
        assert_eq!(input.name, "Fruits");

        let max = "a".repeat(50);
        let input: CreateCategoryInput = parse_input(json!({ "name": max })).unwrap();
        assert_eq!(input.name.len(), 50);
    }

    #[test]
    fn create_category_rejects_empty_name() {
        let err = parse_input::<CreateCategoryInput>(json!({ "name": "" })).unwrap_err();
        assert!(validation_message(err).starts_with("name:"));
    }

    #[test]
    fn create_category_rejects_blank_name() {
        let err = parse_input::<CreateCategoryInput>(json!({ "name": "   " })).unwrap_err();
        assert_eq!(validation_message(err), "name: must not be blank");
    }

    #[test]
    fn create_category_rejects_long_name() {
        let err = parse_input::<CreateCategoryInput>(json!({ "name": "a".repeat(51) }))
            .unwrap_err();
        assert_eq!(
            validation_message(err),
            "name: must be between 1 and 50 characters"
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 50 two-byte characters stays within the limit.
        let name = "é".repeat(50);
        let input: CreateCategoryInput = parse_input(json!({ "name": name })).unwrap();
        assert_eq!(input.name.chars().count(), 50);
    }

    #[test]
    fn create_category_rejects_missing_name() {
        let err = parse_input::<CreateCategoryInput>(json!({})).unwrap_err();
        assert!(validation_message(err).contains("missing field `name`"));
    }

    #[test]
    fn update_category_requires_name() {
        let err = parse_input::<UpdateCategoryInput>(json!({ "id": 1 })).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn create_item_bounds_name_at_100() {
        let ok: CreateGroceryItemInput =
            parse_input(json!({ "name": "b".repeat(100), "category_id": 3 })).unwrap();
        assert_eq!(ok.category_id, 3);

        let err = parse_input::<CreateGroceryItemInput>(
            json!({ "name": "b".repeat(101), "category_id": 3 }),
        )
        .unwrap_err();
        assert_eq!(
            validation_message(err),
            "name: must be between 1 and 100 characters"
        );
    }

    #[test]
    fn create_item_rejects_non_integer_category() {
        let err = parse_input::<CreateGroceryItemInput>(
            json!({ "name": "Apples", "category_id": "one" }),
        )
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));

        let err = parse_input::<CreateGroceryItemInput>(
            json!({ "name": "Apples", "category_id": 1.5 }),
        )
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn update_item_fields_are_optional() {
        let input: UpdateGroceryItemInput =
            parse_input(json!({ "id": 4, "purchased": true })).unwrap();
        assert_eq!(input.id, 4);
        assert_eq!(input.purchased, Some(true));
        assert!(input.name.is_none());
        assert!(input.category_id.is_none());
        assert!(!input.is_empty());

        let bare: UpdateGroceryItemInput = parse_input(json!({ "id": 4 })).unwrap();
        assert!(bare.is_empty());
    }

    #[test]
    fn update_item_rejects_null_fields() {
        for field in ["name", "category_id", "purchased"] {
            let err = parse_input::<UpdateGroceryItemInput>(json!({ "id": 1, field: null }))
                .unwrap_err();
            assert!(
                validation_message(err).contains("invalid type: null"),
                "null {field} should be rejected"
            );
        }
    }

    #[test]
    fn update_item_validates_present_name() {
        let err = parse_input::<UpdateGroceryItemInput>(json!({ "id": 4, "name": "" }))
            .unwrap_err();
        assert!(validation_message(err).starts_with("name:"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let input: DeleteInput = parse_input(json!({ "id": 9, "extra": "x" })).unwrap();
        assert_eq!(input.id, 9);
    }

    #[test]
    fn id_inputs_reject_null_payload() {
        let err = parse_input::<GetByIdInput>(serde_json::Value::Null).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }
}
