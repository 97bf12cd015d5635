use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{ProfileFields, Role, User};

use super::profile::{insert_doctor_profile, insert_patient_profile};

/// Look up a user by username.
pub fn find_user_by_username(
    conn: &Connection,
    username: &str,
) -> Result<Option<User>, DatabaseError> {
    conn.query_row(
        "SELECT id, username, password_hash, role FROM users WHERE username = ?1",
        params![username],
        row_to_user,
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// Look up a user by id.
pub fn find_user_by_id(conn: &Connection, id: i64) -> Result<Option<User>, DatabaseError> {
    conn.query_row(
        "SELECT id, username, password_hash, role FROM users WHERE id = ?1",
        params![id],
        row_to_user,
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// Create a user together with its role-appropriate profile row.
///
/// Both inserts run in one transaction: a registered account always has
/// a profile, or neither row exists. A duplicate username — whether
/// caught by the lookup or by the UNIQUE constraint under a concurrent
/// insert — surfaces as [`DatabaseError::ConstraintViolation`].
///
/// Returns the new user id.
pub fn register_user(
    conn: &mut Connection,
    username: &str,
    password_hash: &str,
    role: Role,
    fields: &ProfileFields,
) -> Result<i64, DatabaseError> {
    let tx = conn.transaction()?;

    let taken: Option<i64> = tx
        .query_row(
            "SELECT id FROM users WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )
        .optional()?;
    if taken.is_some() {
        return Err(DatabaseError::ConstraintViolation(format!(
            "username already taken: {username}"
        )));
    }

    tx.execute(
        "INSERT INTO users (username, password_hash, role) VALUES (?1, ?2, ?3)",
        params![username, password_hash, role.as_str()],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DatabaseError::ConstraintViolation(format!("username already taken: {username}"))
        }
        other => DatabaseError::from(other),
    })?;
    let user_id = tx.last_insert_rowid();

    match role {
        Role::Doctor => insert_doctor_profile(&tx, user_id, fields)?,
        Role::Patient => insert_patient_profile(&tx, user_id, fields)?,
    };

    tx.commit()?;
    Ok(user_id)
}

fn row_to_user(row: &rusqlite::Row) -> Result<User, rusqlite::Error> {
    let role_str: String = row.get(3)?;
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        password_hash: row.get(2)?,
        role: Role::from_str(&role_str).unwrap_or(Role::Patient),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{get_doctor_profile_for_user, get_patient_profile_for_user};
    use crate::db::sqlite::open_memory_database;

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    #[test]
    fn register_doctor_creates_user_and_profile() {
        let mut conn = test_db();
        let id = register_user(
            &mut conn,
            "alice",
            "$phc$stub",
            Role::Doctor,
            &ProfileFields::default(),
        )
        .unwrap();

        let user = find_user_by_username(&conn, "alice").unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.role, Role::Doctor);

        let profile = get_doctor_profile_for_user(&conn, id).unwrap().unwrap();
        assert_eq!(profile.specialty, "General Practice");
        assert_eq!(profile.location, "Nairobi");
        assert!(profile.is_available);
    }

    #[test]
    fn register_patient_creates_patient_profile() {
        let mut conn = test_db();
        let id = register_user(
            &mut conn,
            "bob",
            "$phc$stub",
            Role::Patient,
            &ProfileFields {
                full_name: Some("Bob Otieno".into()),
                age: Some(44),
                ..Default::default()
            },
        )
        .unwrap();

        let profile = get_patient_profile_for_user(&conn, id).unwrap().unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Bob Otieno"));
        assert_eq!(profile.age, Some(44));
        assert!(get_doctor_profile_for_user(&conn, id).unwrap().is_none());
    }

    #[test]
    fn duplicate_username_is_rejected_and_first_user_untouched() {
        let mut conn = test_db();
        let first = register_user(
            &mut conn,
            "alice",
            "$phc$first",
            Role::Doctor,
            &ProfileFields::default(),
        )
        .unwrap();

        let result = register_user(
            &mut conn,
            "alice",
            "$phc$second",
            Role::Patient,
            &ProfileFields::default(),
        );
        assert!(matches!(
            result,
            Err(DatabaseError::ConstraintViolation(_))
        ));

        let user = find_user_by_username(&conn, "alice").unwrap().unwrap();
        assert_eq!(user.id, first);
        assert_eq!(user.password_hash, "$phc$first");
        assert_eq!(user.role, Role::Doctor);
    }

    #[test]
    fn failed_registration_leaves_no_rows() {
        let mut conn = test_db();
        // Sabotage the profile insert so the transaction must roll back
        conn.execute_batch("DROP TABLE doctor_profiles;").unwrap();

        let result = register_user(
            &mut conn,
            "carol",
            "$phc$stub",
            Role::Doctor,
            &ProfileFields::default(),
        );
        assert!(result.is_err());

        // The user insert was rolled back with the failed profile insert
        assert!(find_user_by_username(&conn, "carol").unwrap().is_none());
    }

    #[test]
    fn find_unknown_username_returns_none() {
        let conn = test_db();
        assert!(find_user_by_username(&conn, "ghost").unwrap().is_none());
        assert!(find_user_by_id(&conn, 99).unwrap().is_none());
    }
}
