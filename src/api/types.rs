//! Shared types for the API layer.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::db::DbStatus;

/// Shared context for all API routes: the database handle plus the
/// startup status and deployment-region label reported by the health
/// endpoint. Built once in `main` and handed to handlers via axum
/// `State` — there is no other process-wide mutable state.
#[derive(Clone)]
pub struct ApiContext {
    db: Arc<Mutex<Connection>>,
    pub db_status: DbStatus,
    pub region: String,
}

impl ApiContext {
    pub fn new(conn: Connection, db_status: DbStatus, region: String) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            db_status,
            region,
        }
    }

    /// Lock the database handle for one logical operation.
    pub fn lock_db(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db
            .lock()
            .map_err(|_| ApiError::Internal("database lock poisoned".into()))
    }
}

/// Plain confirmation payload: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
