//! Name-indexed collection of contact records.
//!
//! This module provides the address book: an in-memory map from name text
//! to [`Record`] with contact-level CRUD operations.

use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// The address book: a mapping from name text to contact record.
///
/// The book exclusively owns every record it holds. At most one record
/// exists per distinct name string; inserting a second record under an
/// existing name silently replaces the prior record, phones included.
/// Iteration is in name order, which gives deterministic rendering.
///
/// The book is not internally synchronized; callers needing concurrent
/// access must wrap it in their own lock.
///
/// # Example
///
/// ```
/// use carddex::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John").unwrap());
/// assert!(book.find("John").is_some());
/// assert!(book.delete("John"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name text.
    ///
    /// If a record with the same name already exists, it will be replaced.
    pub fn add_record(&mut self, record: Record) {
        debug!(name = %record.name(), phones = record.phones().len(), "Adding record");
        self.records.insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by exact name text.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name text, for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record under `name`, all phones included.
    ///
    /// Returns whether a removal occurred; a missing key is a no-op.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.records.remove(name).is_some();
        if removed {
            debug!(name = %name, "Deleted record");
        }
        removed
    }

    /// Get the number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

// Serde support - serialize as a sequence of records. The keys are derived
// from the record names, so they carry no independent information.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - deserialize by re-inserting each record, so the
// key-equals-name invariant and last-write-wins both hold after a round trip.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}

// Display support - one line per record, in name order
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .records
            .values()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
