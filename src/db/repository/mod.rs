//! Repository layer — entity-scoped database operations.
//!
//! Free functions over a borrowed [`rusqlite::Connection`]; each write is
//! one statement-and-commit, except registration which spans a user row
//! and a profile row inside a single transaction.

mod prescription;
mod profile;
mod symptom_log;
mod user;
mod vitals;

pub use prescription::*;
pub use profile::*;
pub use symptom_log::*;
pub use user::*;
pub use vitals::*;
