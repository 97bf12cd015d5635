use std::path::Path;

use rusqlite::Connection;
use tracing;

use super::DatabaseError;

/// Outcome of the one-time schema initialization at process start.
/// Recorded once and reported by the health endpoint for the lifetime
/// of the process; no per-request probe updates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbStatus {
    Active,
    Degraded,
}

impl DbStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DbStatus::Active => "Active",
            DbStatus::Degraded => "Degraded",
        }
    }
}

/// Open a SQLite connection to the given path and initialize the schema
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Open the database without letting initialization kill the process.
///
/// The container orchestrator keeps probing `/api/health`, and that probe
/// must not fail merely because the schema pre-exists on a persistent
/// volume or the file is briefly locked by a previous instance. Any
/// schema-creation failure is therefore logged and recorded as
/// [`DbStatus::Degraded`] while the process keeps serving. If the file
/// itself cannot be opened, the connection falls back to an in-memory
/// database — the deployment makes no durability promise for this path.
pub fn open_resilient(path: &Path) -> Result<(Connection, DbStatus), DatabaseError> {
    match Connection::open(path) {
        Ok(conn) => {
            let status = match configure_pragmas(&conn).and_then(|_| init_schema(&conn)) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "database initialized");
                    DbStatus::Active
                }
                Err(e) => {
                    tracing::warn!("database already exists or busy: {e}");
                    DbStatus::Degraded
                }
            };
            Ok((conn, status))
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                "cannot open database file, falling back to in-memory: {e}"
            );
            let conn = open_memory_database()?;
            Ok((conn, DbStatus::Degraded))
        }
    }
}

fn configure_pragmas(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Create all tables. Idempotent: the DDL uses IF NOT EXISTS throughout.
pub fn init_schema(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(include_str!("../../resources/schema/001_initial.sql"))
        .map_err(|e| DatabaseError::SchemaFailed {
            reason: e.to_string(),
        })
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}
