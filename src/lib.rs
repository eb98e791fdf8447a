//! Contact Book - an interactive personal contact manager.
//!
//! This library stores contacts in memory as a name plus a list of
//! validated 10-digit phone numbers, and drives them from a text prompt.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and the `Field` trait
//! - **models**: `Record` (one contact) and `AddressBook` (records by name)
//! - **error**: Error taxonomy and translation to user messages
//! - **config**: Configuration management from environment variables
//! - **session**: The interactive prompt loop

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ErrorKind};
pub use models::{AddressBook, Record};
pub use session::{Command, Session};
