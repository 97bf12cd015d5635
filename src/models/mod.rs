pub mod enums;
pub mod prescription;
pub mod profile;
pub mod symptom_log;
pub mod user;
pub mod vitals;

pub use enums::*;
pub use prescription::*;
pub use profile::*;
pub use symptom_log::*;
pub use user::*;
pub use vitals::*;
