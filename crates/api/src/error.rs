use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use grocery_core::error::CoreError;
use serde_json::json;

/// Application-level error type for procedure handlers.
///
/// Wraps [`CoreError`] for domain errors and adds transport-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `grocery_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No procedure is registered under the requested name.
    #[error("Unknown procedure: {0}")]
    UnknownProcedure(String),

    /// A mutation was invoked over GET.
    #[error("Procedure {0} is a mutation and must be called with POST")]
    MethodNotAllowed(&'static str),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::ConstraintViolation(msg) => {
                    (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Transport errors ---
            AppError::UnknownProcedure(_) => {
                (StatusCode::NOT_FOUND, "UNKNOWN_PROCEDURE", self.to_string())
            }
            AppError::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                self.to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - Foreign key violations (SQLSTATE 23503) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if grocery_db::is_foreign_key_violation(err) {
        return (
            StatusCode::CONFLICT,
            "CONSTRAINT_VIOLATION",
            "Referenced row does not exist".to_string(),
        );
    }
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
