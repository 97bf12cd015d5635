//! Specialist directory search.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub specialty: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize)]
pub struct SpecialistEntry {
    pub name: String,
    pub specialty: String,
    pub location: String,
}

/// `GET /api/search/specialists` — filter doctor profiles by
/// case-insensitive substring on specialty and/or location (ANDed when
/// both are given). An empty or absent parameter matches everything;
/// no match is a 200 with an empty list.
pub async fn specialists(
    State(ctx): State<ApiContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SpecialistEntry>>, ApiError> {
    // An empty query-string value means "no filter", same as absent
    let specialty = query.specialty.as_deref().filter(|s| !s.is_empty());
    let location = query.location.as_deref().filter(|s| !s.is_empty());

    let conn = ctx.lock_db()?;
    let profiles = repository::search_doctor_profiles(&conn, specialty, location)?;

    let mut results = Vec::with_capacity(profiles.len());
    for profile in profiles {
        match repository::find_user_by_id(&conn, profile.user_id)? {
            Some(user) => results.push(SpecialistEntry {
                name: format!("Dr. {}", user.username),
                specialty: profile.specialty,
                location: profile.location,
            }),
            // Registration is transactional, so an orphaned profile should
            // not exist; skip rather than 500 if one ever does
            None => continue,
        }
    }

    Ok(Json(results))
}
