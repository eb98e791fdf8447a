//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling,
//! plus the single translation from a failure to the message shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Shown when a contact name is not in the book.
pub const MSG_NO_SUCH_CONTACT: &str = "No contact found with this name.";

/// Shown for malformed values and failed edits.
pub const MSG_INVALID_INPUT: &str = "Invalid input. Please provide a valid input.";

/// Shown when a command receives the wrong number of arguments.
pub const MSG_WRONG_ARITY: &str =
    "Invalid number of arguments. Please provide the correct number of arguments.";

/// Shown for anything the other messages do not cover.
pub const MSG_UNEXPECTED: &str = "An error occurred while processing your request.";

/// Broad classification of a [`BookError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A name or phone lookup target is absent.
    NotFound,
    /// A value failed validation.
    InvalidFormat,
    /// A command received the wrong number of arguments.
    WrongArity,
    /// Anything else.
    Unexpected,
}

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is filed under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record has no phone with this number
    #[error("Phone number does not exist: {0}")]
    PhoneNotFound(String),

    /// A name or phone failed validation
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// The replacement phone in an edit failed validation
    #[error("Invalid new phone number format: {0}")]
    InvalidEdit(#[source] ValidationError),

    /// Command received the wrong number of arguments
    #[error("Command '{command}' expects {expected} argument(s), got {got}")]
    WrongArity {
        command: String,
        expected: usize,
        got: usize,
    },

    /// Failure outside the known taxonomy
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl BookError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ContactNotFound(_) | Self::PhoneNotFound(_) => ErrorKind::NotFound,
            Self::InvalidFormat(_) | Self::InvalidEdit(_) => ErrorKind::InvalidFormat,
            Self::WrongArity { .. } => ErrorKind::WrongArity,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Translate this error into the fixed message shown to the user.
    ///
    /// `ContactNotFound` maps to the missing-contact message. `PhoneNotFound`,
    /// `InvalidFormat` and `InvalidEdit` map to the invalid-input message.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ContactNotFound(_) => MSG_NO_SUCH_CONTACT,
            Self::PhoneNotFound(_) | Self::InvalidFormat(_) | Self::InvalidEdit(_) => {
                MSG_INVALID_INPUT
            }
            Self::WrongArity { .. } => MSG_WRONG_ARITY,
            Self::Unexpected(_) => MSG_UNEXPECTED,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("Bob".to_string());
        assert_eq!(err.to_string(), "Contact not found: Bob");

        let err = BookError::InvalidEdit(ValidationError::InvalidPhone("1".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid new phone number format: Invalid phone number format. It should contain 10 digits."
        );

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: bad");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            BookError::ContactNotFound("Bob".into()).user_message(),
            "No contact found with this name."
        );
        assert_eq!(
            BookError::from(ValidationError::InvalidPhone("x".into())).user_message(),
            "Invalid input. Please provide a valid input."
        );
        assert_eq!(
            BookError::InvalidEdit(ValidationError::InvalidPhone("x".into())).user_message(),
            "Invalid input. Please provide a valid input."
        );
        assert_eq!(
            BookError::PhoneNotFound("1234567890".into()).user_message(),
            "Invalid input. Please provide a valid input."
        );
        assert_eq!(
            BookError::WrongArity {
                command: "exit".into(),
                expected: 0,
                got: 2
            }
            .user_message(),
            "Invalid number of arguments. Please provide the correct number of arguments."
        );
        assert_eq!(
            BookError::Unexpected("boom".into()).user_message(),
            "An error occurred while processing your request."
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            BookError::PhoneNotFound("1".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            BookError::ContactNotFound("a".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            BookError::from(ValidationError::EmptyName).kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            BookError::Unexpected("?".into()).kind(),
            ErrorKind::Unexpected
        );
    }
}
