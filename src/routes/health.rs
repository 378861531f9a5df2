//! Health Probe

use axum::{extract::State, response::Json};
use sqlx::PgPool;

/// Report service status and whether the database is configured.
pub async fn health(State(pool): State<Option<PgPool>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "database": pool.is_some(),
    }))
}
