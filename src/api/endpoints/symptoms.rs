//! Symptom logging endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageResponse};
use crate::db::repository;

#[derive(Deserialize)]
pub struct SymptomRequest {
    pub user_id: i64,
    pub description: String,
}

/// `POST /api/symptoms` — append a symptom entry; the timestamp is
/// assigned server-side.
pub async fn log(
    State(ctx): State<ApiContext>,
    Json(req): Json<SymptomRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let conn = ctx.lock_db()?;
    repository::insert_symptom_log(&conn, req.user_id, &req.description)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Symptoms shared",
        }),
    ))
}
