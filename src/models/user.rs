use serde::{Deserialize, Serialize};

use super::enums::Role;

/// A registered account. `password_hash` is a salted PHC string — the
/// plaintext never reaches storage or logs, and the hash never reaches
/// a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}
