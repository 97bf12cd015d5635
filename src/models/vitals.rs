use serde::{Deserialize, Serialize};

/// One vitals reading for a patient. Heart rate and temperature are kept
/// as the short free-form strings the client submitted — no parsing, no
/// range checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vitals {
    pub id: i64,
    pub patient_id: i64,
    pub heart_rate: String,
    pub temperature: String,
}
