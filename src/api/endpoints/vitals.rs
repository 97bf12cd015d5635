//! Vitals submission endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageResponse};
use crate::db::repository;

#[derive(Deserialize)]
pub struct VitalsRequest {
    pub user_id: i64,
    #[serde(rename = "heartRate")]
    pub heart_rate: String,
    pub temp: String,
}

/// `POST /api/vitals` — append one vitals reading, fields verbatim.
pub async fn save(
    State(ctx): State<ApiContext>,
    Json(req): Json<VitalsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let conn = ctx.lock_db()?;
    repository::insert_vitals(&conn, req.user_id, &req.heart_rate, &req.temp)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Vitals saved",
        }),
    ))
}
