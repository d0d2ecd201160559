//! HTTP transport for the procedure registry.
//!
//! ```text
//! GET  /rpc/{procedure}?input=<json>   -> queries only
//! POST /rpc/{procedure}                -> any procedure, JSON body as input
//! ```

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use grocery_core::error::CoreError;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::rpc::{self, Procedure, ProcedureKind};
use crate::state::AppState;

/// Query string accepted on GET calls.
#[derive(Debug, Deserialize)]
pub struct RpcQueryParams {
    /// URL-encoded JSON input.
    pub input: Option<String>,
}

/// GET /rpc/{procedure}
async fn call_query(
    State(state): State<AppState>,
    Path(name): Path<String>,
    params: Result<Query<RpcQueryParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Value>>> {
    let procedure: Procedure = name.parse()?;
    if procedure.kind() == ProcedureKind::Mutation {
        return Err(AppError::MethodNotAllowed(procedure.name()));
    }
    let Query(params) =
        params.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;

    let input = params.input.as_deref().map(decode_input).transpose()?;
    let data = rpc::dispatch(&state.pool, procedure, input).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /rpc/{procedure}
async fn call_any(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> AppResult<Json<DataResponse<Value>>> {
    let procedure: Procedure = name.parse()?;

    let input = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        Some(decode_input(&body)?)
    };
    let data = rpc::dispatch(&state.pool, procedure, input).await?;
    Ok(Json(DataResponse { data }))
}

fn decode_input(raw: impl AsRef<[u8]>) -> Result<Value, CoreError> {
    serde_json::from_slice(raw.as_ref())
        .map_err(|e| CoreError::Validation(format!("Malformed JSON input: {e}")))
}

/// Procedure routes, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/rpc/{procedure}", get(call_query).post(call_any))
}
