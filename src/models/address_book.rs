//! The in-memory collection of contacts.

use super::record::Record;
use crate::error::{BookError, BookResult};
use std::collections::HashMap;

/// Records keyed by contact name.
///
/// The key of every entry equals its record's name. The map itself is
/// private so callers cannot break that.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if let Some(previous) = self.records.insert(key, record) {
            tracing::debug!(name = %previous.name(), "Replaced existing contact");
        }
        tracing::info!(contacts = self.records.len(), "Contact stored");
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for editing its phones.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record filed under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        tracing::info!(contacts = self.records.len(), "Contact deleted");
        Ok(record)
    }

    /// Whether a record is filed under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
