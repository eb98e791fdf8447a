//! Data models for the contact book.
//!
//! This module contains the contact record and the address book that files
//! records by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
