//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Required number of digits in a canonical phone number.
const PHONE_DIGITS: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// Construction normalizes the input by discarding every character that is
/// not an ASCII decimal digit, then requires exactly 10 digits to remain.
/// The stored value is always the canonical 10-digit string, never the
/// original formatted text.
///
/// # Example
///
/// ```
/// use carddex::domain::Phone;
///
/// let phone = Phone::new("000-123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "0001234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, normalizing and validating the input.
    ///
    /// # Validation Rules
    ///
    /// - Non-digit characters (separators, whitespace, letters) are discarded
    /// - The remaining digits, in original order, must number exactly 10
    /// - Too few and too many digits are rejected identically
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the digit count is not 10.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let digits = Self::digits_only(&phone);

        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone(format!(
                "{:?} must contain exactly {} digits, found {}",
                phone,
                PHONE_DIGITS,
                digits.len()
            )));
        }

        Ok(Self(digits))
    }

    /// Extract the ASCII digits of `phone`, in original order.
    fn digits_only(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Get the canonical phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
