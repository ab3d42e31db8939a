//! Carddex - A validated in-memory address book.
//!
//! This library stores named contact records, each holding zero or more
//! validated phone numbers, keyed by name, with create/read/update/delete
//! operations at both the record and book level.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and the
//!   validation error taxonomy
//! - **models**: The `Record` entity (one name plus an ordered phone list)
//! - **book**: The `AddressBook` collection (name-indexed record map)
//!
//! All operations are synchronous and single-threaded; the library does no
//! I/O (rendering produces in-memory text, callers decide where it goes).

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod models;

pub use book::AddressBook;
pub use domain::{Name, Phone, ValidationError, ValidationResult};
pub use models::Record;
