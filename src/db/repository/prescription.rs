use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Prescription;

/// Insert a prescription. The patient is recorded by free-text name; only
/// the issuing doctor is a real foreign key.
pub fn insert_prescription(
    conn: &Connection,
    doctor_id: i64,
    patient_name: &str,
    medication_details: &str,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO prescriptions (doctor_id, patient_name, medication_details)
         VALUES (?1, ?2, ?3)",
        params![doctor_id, patient_name, medication_details],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Get all prescriptions issued by a doctor, oldest first.
pub fn get_prescriptions_for_doctor(
    conn: &Connection,
    doctor_id: i64,
) -> Result<Vec<Prescription>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, doctor_id, patient_name, medication_details
         FROM prescriptions WHERE doctor_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![doctor_id], |row| {
        Ok(Prescription {
            id: row.get(0)?,
            doctor_id: row.get(1)?,
            patient_name: row.get(2)?,
            medication_details: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}
