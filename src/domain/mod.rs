//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact names and phone numbers. These value objects provide validation
//! at construction time and prevent invalid data from being represented in
//! the system.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::{ValidationError, ValidationResult};
pub use name::Name;
pub use phone::Phone;
