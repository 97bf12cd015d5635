use serde::{Deserialize, Serialize};

/// A prescription issued by a doctor. The patient is identified by a
/// free-text name, not a user id — there is no referential link back to
/// the users table for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_name: String,
    pub medication_details: String,
}
