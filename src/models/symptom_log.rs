use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A symptom entry shared by a patient. The timestamp is assigned by the
/// database at insert time, never by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomLog {
    pub id: i64,
    pub patient_id: i64,
    pub description: String,
    pub timestamp: NaiveDateTime,
}
