//! Intake session values and advisor book records

mod fields;
pub mod loader;
mod profile;

pub use fields::{currency_digits, FieldStore, FieldValue, CURRENCY_DIGIT_LIMIT};
pub use loader::{load_profiles, load_profiles_from_reader, LoadError};
pub use profile::ClientProfile;
