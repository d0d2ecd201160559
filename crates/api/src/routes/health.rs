use axum::extract::State;
use axum::{routing::get, Json, Router};

use crate::handlers::health::health_report;
use crate::response::HealthReport;
use crate::state::AppState;

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(health_report(&state.pool).await)
}

/// Plain health route, outside `/rpc`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
