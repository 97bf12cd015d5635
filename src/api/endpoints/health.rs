//! Health check endpoint for orchestration probes.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub region: String,
}

/// `GET /api/health` — liveness plus the recorded startup database
/// status. Always 200; the status is the one-time initialization
/// outcome, no live connectivity probe runs here.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: format!("Healthy - Database {}", ctx.db_status.as_str()),
        region: ctx.region.clone(),
    })
}
