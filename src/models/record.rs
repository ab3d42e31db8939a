//! Record model representing one contact in the address book.

use crate::domain::{Name, Phone, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// One contact: a validated name plus an ordered list of validated phone
/// numbers.
///
/// The name is fixed at construction and never replaced. The phone list
/// keeps insertion order and permits duplicate values; all phone-level
/// operations compare against the stored canonical 10-digit form.
///
/// # Example
///
/// ```
/// use carddex::models::Record;
///
/// let mut record = Record::new("John").unwrap();
/// record.add_phone("123-456-7890").unwrap();
/// assert!(record.find_phone("1234567890").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with the given name and no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// Get the record's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get the record's phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it to the phone list.
    ///
    /// Duplicates are allowed. On a validation failure nothing is appended.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` does not contain
    /// exactly 10 digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> ValidationResult<()> {
        let phone = Phone::new(phone)?;
        trace!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose canonical value equals `phone` exactly.
    ///
    /// The argument is compared as-is against stored canonical values; it is
    /// not normalized here (use `find_phone` or pass canonical digits).
    /// Returns whether a removal occurred; a missing number is a no-op, not
    /// an error.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                trace!(name = %self.name, phone = %phone, "Removing phone");
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone matching `old_phone` with a freshly validated
    /// phone built from `new_phone`.
    ///
    /// Edit policy: the matched phone is removed and the replacement is
    /// appended to the end of the list, so the edited number moves to the
    /// end while the other phones keep their relative order.
    ///
    /// The replacement is validated before the lookup, so no failure path
    /// mutates the record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new_phone` fails
    /// validation, or if no phone matches `old_phone` (unlike
    /// `remove_phone`, editing a missing number is a reported error).
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: impl Into<String>,
    ) -> ValidationResult<()> {
        let replacement = Phone::new(new_phone)?;

        if !self.remove_phone(old_phone) {
            return Err(ValidationError::InvalidPhone(format!(
                "{:?} not found in record",
                old_phone
            )));
        }

        trace!(name = %self.name, old = %old_phone, new = %replacement, "Edited phone");
        self.phones.push(replacement);
        Ok(())
    }

    /// Find the first phone whose canonical value equals `phone` exactly.
    ///
    /// The argument is not normalized; the caller compares canonical forms.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

// Display support - one line per record
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
