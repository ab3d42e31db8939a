//! Data models for address book entities.
//!
//! This module contains the data structures representing contact records,
//! built on the validated value objects from `domain`.

pub mod record;

pub use record::Record;
