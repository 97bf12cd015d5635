use serde::{Deserialize, Serialize};

/// Specialty assigned to a doctor profile when none is supplied.
pub const DEFAULT_SPECIALTY: &str = "General Practice";
/// Location assigned to a doctor profile when none is supplied.
pub const DEFAULT_LOCATION: &str = "Nairobi";

/// Directory entry for a doctor, linked one-to-one to its user row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub id: i64,
    pub user_id: i64,
    pub specialty: String,
    pub location: String,
    pub is_available: bool,
}

/// Descriptive record for a patient, linked one-to-one to its user row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    pub id: i64,
    pub user_id: i64,
    pub full_name: Option<String>,
    pub age: Option<i64>,
    pub history: Option<String>,
}

/// Optional descriptive fields a client may supply at registration.
/// Doctors fall back to [`DEFAULT_SPECIALTY`]/[`DEFAULT_LOCATION`];
/// patient fields simply stay empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileFields {
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub full_name: Option<String>,
    pub age: Option<i64>,
    pub history: Option<String>,
}
