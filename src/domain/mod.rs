//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the two scalar fields of a
//! contact: its name and its phone numbers. These value objects validate at
//! construction time, so an invalid phone can never be stored in a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
