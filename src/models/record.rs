//! Record model representing one contact in the book.

use crate::domain::{Field, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name plus an ordered list of phone numbers.
///
/// Duplicate phones are allowed and insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidFormat` if the name is empty.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate and append a phone number. Duplicates are not rejected.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| !p.matches(phone));
        tracing::debug!(
            name = %self.name,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// Every copy of `old_phone` is removed but only one `new_phone` is
    /// appended, at the end of the list. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old_phone` is not on this record
    /// - `BookError::InvalidEdit` if `new_phone` is not a valid phone
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        if self.find_phone(old_phone).is_none() {
            return Err(BookError::PhoneNotFound(old_phone.to_string()));
        }

        let new_phone = Phone::new(new_phone).map_err(BookError::InvalidEdit)?;
        self.remove_phone(old_phone);
        self.phones.push(new_phone);
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.matches(phone))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name.value(),
            phones.join("; ")
        )
    }
}
