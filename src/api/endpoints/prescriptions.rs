//! Prescription submission endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageResponse};
use crate::db::repository;

#[derive(Deserialize)]
pub struct PrescriptionRequest {
    pub user_id: i64,
    #[serde(rename = "patientName")]
    pub patient_name: String,
    pub meds: String,
}

/// `POST /api/prescriptions` — record a prescription issued by the
/// doctor identified by `user_id`. The patient stays a free-text name.
pub async fn save(
    State(ctx): State<ApiContext>,
    Json(req): Json<PrescriptionRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let conn = ctx.lock_db()?;
    repository::insert_prescription(&conn, req.user_id, &req.patient_name, &req.meds)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Prescription saved",
        }),
    ))
}
