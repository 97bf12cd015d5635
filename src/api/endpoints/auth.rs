//! Registration and login endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageResponse};
use crate::auth::password;
use crate::db::repository;
use crate::db::DatabaseError;
use crate::models::{ProfileFields, Role};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: String,
    #[serde(flatten)]
    pub profile: ProfileFields,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub role: Role,
    pub username: String,
    pub id: i64,
}

/// `POST /api/register` — create an account plus its role profile.
///
/// Duplicate usernames fail with 400 before anything is written; the
/// user and profile inserts share one transaction, so a half-registered
/// account can never persist.
pub async fn register(
    State(ctx): State<ApiContext>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let role = Role::from_str(&req.role)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown role: {}", req.role)))?;
    if req.username.trim().is_empty() {
        return Err(ApiError::BadRequest("Username is required".into()));
    }

    // Hash before taking the database lock — this is the slow part
    let password_hash =
        password::hash_password(&req.password).map_err(|e| ApiError::Internal(e.to_string()))?;

    let mut conn = ctx.lock_db()?;
    if repository::find_user_by_username(&conn, &req.username)?.is_some() {
        return Err(ApiError::AlreadyExists);
    }
    let user_id = repository::register_user(
        &mut conn,
        &req.username,
        &password_hash,
        role,
        &req.profile,
    )
    .map_err(|e| match e {
        DatabaseError::ConstraintViolation(_) => ApiError::AlreadyExists,
        other => ApiError::from(other),
    })?;

    tracing::info!(user_id, role = role.as_str(), "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully",
        }),
    ))
}

/// `POST /api/login` — verify credentials.
///
/// Unknown usernames and wrong passwords produce the identical 401
/// response; on success the stored role, username and id come back so
/// the frontend can route to the right dashboard.
pub async fn login(
    State(ctx): State<ApiContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = {
        let conn = ctx.lock_db()?;
        repository::find_user_by_username(&conn, &req.username)?
    };

    let user = user.ok_or(ApiError::InvalidCredentials)?;
    if !password::verify_password(&req.password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(LoginResponse {
        message: "Login successful",
        role: user.role,
        username: user.username,
        id: user.id,
    }))
}
