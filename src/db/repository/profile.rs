use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{
    DoctorProfile, PatientProfile, ProfileFields, DEFAULT_LOCATION, DEFAULT_SPECIALTY,
};

/// Insert a doctor profile row, falling back to the stock specialty and
/// location when the registration supplied none.
pub fn insert_doctor_profile(
    conn: &Connection,
    user_id: i64,
    fields: &ProfileFields,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO doctor_profiles (user_id, specialty, location) VALUES (?1, ?2, ?3)",
        params![
            user_id,
            fields.specialty.as_deref().unwrap_or(DEFAULT_SPECIALTY),
            fields.location.as_deref().unwrap_or(DEFAULT_LOCATION),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert a patient profile row.
pub fn insert_patient_profile(
    conn: &Connection,
    user_id: i64,
    fields: &ProfileFields,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO patient_profiles (user_id, full_name, age, history) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, fields.full_name, fields.age, fields.history],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Get the doctor profile belonging to a user, if any.
pub fn get_doctor_profile_for_user(
    conn: &Connection,
    user_id: i64,
) -> Result<Option<DoctorProfile>, DatabaseError> {
    conn.query_row(
        "SELECT id, user_id, specialty, location, is_available
         FROM doctor_profiles WHERE user_id = ?1",
        params![user_id],
        row_to_doctor_profile,
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// Get the patient profile belonging to a user, if any.
pub fn get_patient_profile_for_user(
    conn: &Connection,
    user_id: i64,
) -> Result<Option<PatientProfile>, DatabaseError> {
    conn.query_row(
        "SELECT id, user_id, full_name, age, history
         FROM patient_profiles WHERE user_id = ?1",
        params![user_id],
        |row| {
            Ok(PatientProfile {
                id: row.get(0)?,
                user_id: row.get(1)?,
                full_name: row.get(2)?,
                age: row.get(3)?,
                history: row.get(4)?,
            })
        },
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// Case-insensitive substring search over doctor profiles.
///
/// Filters are ANDed when both are present; an absent filter matches
/// everything. `instr` over lowered text sidesteps LIKE-wildcard
/// escaping in user input.
pub fn search_doctor_profiles(
    conn: &Connection,
    specialty: Option<&str>,
    location: Option<&str>,
) -> Result<Vec<DoctorProfile>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, specialty, location, is_available
         FROM doctor_profiles
         WHERE (?1 IS NULL OR instr(lower(specialty), lower(?1)) > 0)
           AND (?2 IS NULL OR instr(lower(location), lower(?2)) > 0)
         ORDER BY id",
    )?;
    let rows = stmt.query_map(params![specialty, location], row_to_doctor_profile)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}

fn row_to_doctor_profile(row: &rusqlite::Row) -> Result<DoctorProfile, rusqlite::Error> {
    let available: i64 = row.get(4)?;
    Ok(DoctorProfile {
        id: row.get(0)?,
        user_id: row.get(1)?,
        specialty: row.get(2)?,
        location: row.get(3)?,
        is_available: available != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::models::Role;

    fn seed_doctor(conn: &mut Connection, username: &str, specialty: &str, location: &str) -> i64 {
        crate::db::repository::register_user(
            conn,
            username,
            "$phc$stub",
            Role::Doctor,
            &ProfileFields {
                specialty: Some(specialty.into()),
                location: Some(location.into()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    #[test]
    fn search_without_filters_returns_all() {
        let mut conn = test_db();
        seed_doctor(&mut conn, "achieng", "Cardiology", "Nairobi");
        seed_doctor(&mut conn, "barasa", "Dermatology", "Kisumu");

        let all = search_doctor_profiles(&conn, None, None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn specialty_filter_is_case_insensitive_substring() {
        let mut conn = test_db();
        seed_doctor(&mut conn, "achieng", "Cardiology", "Nairobi");
        seed_doctor(&mut conn, "barasa", "Dermatology", "Kisumu");

        let hits = search_doctor_profiles(&conn, Some("cardio"), None).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].specialty, "Cardiology");

        let none = search_doctor_profiles(&conn, Some("neuro"), None).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn both_filters_are_anded() {
        let mut conn = test_db();
        seed_doctor(&mut conn, "achieng", "Cardiology", "Nairobi");
        seed_doctor(&mut conn, "barasa", "Cardiology", "Kisumu");

        let hits = search_doctor_profiles(&conn, Some("cardio"), Some("nairobi")).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location, "Nairobi");
    }

    #[test]
    fn location_filter_alone_matches() {
        let mut conn = test_db();
        seed_doctor(&mut conn, "achieng", "Cardiology", "Nairobi");
        seed_doctor(&mut conn, "barasa", "Dermatology", "Kisumu");

        let hits = search_doctor_profiles(&conn, None, Some("KISU")).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].specialty, "Dermatology");
    }

    #[test]
    fn doctor_profile_defaults_apply() {
        let mut conn = test_db();
        let user_id = crate::db::repository::register_user(
            &mut conn,
            "daktari",
            "$phc$stub",
            Role::Doctor,
            &ProfileFields::default(),
        )
        .unwrap();

        let profile = get_doctor_profile_for_user(&conn, user_id).unwrap().unwrap();
        assert_eq!(profile.specialty, DEFAULT_SPECIALTY);
        assert_eq!(profile.location, DEFAULT_LOCATION);
    }
}
