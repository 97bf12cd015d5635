use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::SymptomLog;

/// Insert a symptom entry. The timestamp comes from the database-side
/// default, never from the caller.
pub fn insert_symptom_log(
    conn: &Connection,
    patient_id: i64,
    description: &str,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO symptom_logs (patient_id, description) VALUES (?1, ?2)",
        params![patient_id, description],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Get all symptom entries for a patient, oldest first.
pub fn get_symptom_logs_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<SymptomLog>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, description, timestamp
         FROM symptom_logs WHERE patient_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![patient_id], row_to_symptom_log)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}

fn row_to_symptom_log(row: &rusqlite::Row) -> Result<SymptomLog, rusqlite::Error> {
    let ts: String = row.get(3)?;
    Ok(SymptomLog {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        description: row.get(2)?,
        timestamp: NaiveDateTime::parse_from_str(&ts, "%Y-%m-%d %H:%M:%S").unwrap_or_default(),
    })
}
