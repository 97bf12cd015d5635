use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Vitals;

/// Insert a vitals reading. Heart rate and temperature are stored
/// verbatim as submitted.
pub fn insert_vitals(
    conn: &Connection,
    patient_id: i64,
    heart_rate: &str,
    temperature: &str,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO vitals (patient_id, heart_rate, temperature) VALUES (?1, ?2, ?3)",
        params![patient_id, heart_rate, temperature],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Get all vitals readings for a patient, oldest first.
pub fn get_vitals_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Vitals>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, heart_rate, temperature
         FROM vitals WHERE patient_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![patient_id], |row| {
        Ok(Vitals {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            heart_rate: row.get(2)?,
            temperature: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}
