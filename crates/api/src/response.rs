//! Shared response envelope types.
//!
//! Every successful procedure call answers with a `{ "data": ... }`
//! envelope. Use [`DataResponse`] instead of ad-hoc
//! `serde_json::json!({ "data": ... })`.

use serde::{Deserialize, Serialize};

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Output of the delete procedures. Always `{ "success": true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

/// Output of the `healthcheck` procedure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthcheckResponse {
    pub status: String,
    /// RFC 3339 time at which the check ran.
    pub timestamp: String,
}

/// Body of `GET /health`: the liveness answer plus storage reachability.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    #[serde(flatten)]
    pub liveness: HealthcheckResponse,
    pub version: &'static str,
    pub db_healthy: bool,
}
