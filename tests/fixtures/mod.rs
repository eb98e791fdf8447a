//! Shared fixtures for integration tests.
//!
//! Builders for records and scripted sessions over in-memory I/O.

use contact_book::{AddressBook, Config, Record, Session};
use std::io::Cursor;

/// Create a record with the given name and phones.
///
/// Panics if any input is invalid; fixtures are expected to be well-formed.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("fixture name is valid");
    for phone in phones {
        record.add_phone(phone).expect("fixture phone is valid");
    }
    record
}

/// Phones of a record as plain strings, in order.
#[allow(dead_code)]
pub fn phone_list(record: &Record) -> Vec<String> {
    record.phones().iter().map(|p| p.to_string()).collect()
}

/// Feed `script` to a fresh session and return the resulting book and transcript.
#[allow(dead_code)]
pub fn run_script(script: &str) -> (AddressBook, String) {
    run_script_with(script, &Config::default(), AddressBook::new())
}

/// Feed `script` to a session over `book` with the given configuration.
#[allow(dead_code)]
pub fn run_script_with(script: &str, config: &Config, book: AddressBook) -> (AddressBook, String) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut session = Session::with_book(input, Vec::new(), config, book);
    session.run().expect("in-memory I/O does not fail");
    let (book, output) = session.into_parts();
    (book, String::from_utf8(output).expect("session writes UTF-8"))
}
