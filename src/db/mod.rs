pub mod repository;
pub mod sqlite;

pub use repository::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Schema initialization failed: {reason}")]
    SchemaFailed { reason: String },

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}
