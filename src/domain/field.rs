//! Common behaviour of contact fields.

use std::fmt;

/// A single stored value with a textual rendering.
///
/// Every field renders as its raw value, so `to_string()` and `value()`
/// always agree.
pub trait Field: fmt::Display {
    /// The stored value as a string slice.
    fn value(&self) -> &str;

    /// Whether this field holds exactly `text`.
    fn matches(&self, text: &str) -> bool {
        self.value() == text
    }
}
