//! Liveness procedure and the storage-aware health report.

use sqlx::PgPool;

use crate::response::{HealthReport, HealthcheckResponse};

/// healthcheck
///
/// Answers without touching the database; [`health_report`] covers that.
pub fn healthcheck() -> HealthcheckResponse {
    HealthcheckResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    }
}

/// Liveness plus a database ping. Status drops to `degraded` when the
/// ping fails.
pub async fn health_report(pool: &PgPool) -> HealthReport {
    let db_healthy = match grocery_db::health_check(pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    let mut liveness = healthcheck();
    if !db_healthy {
        liveness.status = "degraded".to_string();
    }

    HealthReport {
        liveness,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    }
}
