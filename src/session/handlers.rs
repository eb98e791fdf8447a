//! Command handlers for the interactive session.

use super::command::Command;
use crate::config::Config;
use crate::error::{BookError, BookResult, ErrorKind};
use crate::models::{AddressBook, Record};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};

pub const PROMPT_COMMAND: &str = "Enter a command (add, find, delete, exit): ";
pub const PROMPT_NAME: &str = "Enter the name: ";
pub const PROMPT_PHONE: &str = "Enter the phone number (10 digits): ";
pub const PROMPT_ADD_MORE: &str = "Do you want to add another phone number? (yes/no): ";
pub const PROMPT_FIND: &str = "Enter the name to find: ";
pub const PROMPT_DELETE: &str = "Enter the name to delete: ";

pub const MSG_CONTACT_ADDED: &str = "Contact added.";
pub const MSG_CONTACT_NOT_ADDED: &str = "Contact not added.";
pub const MSG_CONTACT_DELETED: &str = "Contact deleted.";
pub const MSG_CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const MSG_GOODBYE: &str = "Goodbye!";
pub const MSG_INVALID_COMMAND: &str = "Invalid command. Please try again.";

/// What a handler wants shown once it finishes.
///
/// `Ok(None)` means the dialog was abandoned at end of input and there is
/// nothing left to say.
type Outcome = BookResult<Option<String>>;

/// An interactive contact-book session over a line reader and a writer.
///
/// The session owns the address book for its whole lifetime.
pub struct Session<R, W> {
    input: R,
    output: W,
    book: AddressBook,
    phone_retry_limit: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty address book.
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self::with_book(input, output, config, AddressBook::new())
    }

    /// Create a session over an existing address book.
    pub fn with_book(input: R, output: W, config: &Config, book: AddressBook) -> Self {
        Self {
            input,
            output,
            book,
            phone_retry_limit: config.phone_retry_limit,
        }
    }

    /// The address book as it currently stands.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// End the session, handing back the book and the writer.
    pub fn into_parts(self) -> (AddressBook, W) {
        (self.book, self.output)
    }

    /// Run the prompt loop until `exit` or end of input.
    ///
    /// Bad input never ends the loop. Only terminal I/O failures are returned.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Session started");

        loop {
            let Some(line) = self.prompt(PROMPT_COMMAND)? else {
                info!(contacts = self.book.len(), "Input closed, ending session");
                return Ok(());
            };

            let outcome = match Command::parse(&line) {
                Command::Exit => {
                    self.say(MSG_GOODBYE)?;
                    info!(contacts = self.book.len(), "Session ended");
                    return Ok(());
                }
                Command::Add => self.add_contact()?,
                Command::Find => self.find_contact()?,
                Command::Delete => self.delete_contact()?,
                Command::Unknown(text) => {
                    debug!(input = %text, "Unknown command");
                    Ok(Some(MSG_INVALID_COMMAND.to_string()))
                }
            };

            self.respond(outcome)?;
        }
    }

    /// Show a handler's outcome, translating failures to user messages.
    fn respond(&mut self, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Ok(Some(message)) => self.say(&message),
            Ok(None) => Ok(()),
            Err(e) => {
                if e.kind() == ErrorKind::Unexpected {
                    error!(error = %e, "Unexpected failure");
                } else {
                    debug!(error = %e, "Command failed");
                }
                self.say(e.user_message())
            }
        }
    }

    fn add_contact(&mut self) -> io::Result<Outcome> {
        let Some(name) = self.prompt(PROMPT_NAME)? else {
            return Ok(Ok(None));
        };

        let mut record = match Record::new(name) {
            Ok(record) => record,
            Err(e) => return Ok(Err(e)),
        };

        match self.collect_phones(&mut record)? {
            PhoneEntry::Done => {
                self.book.add_record(record);
                Ok(Ok(Some(MSG_CONTACT_ADDED.to_string())))
            }
            PhoneEntry::GaveUp => Ok(Ok(Some(MSG_CONTACT_NOT_ADDED.to_string()))),
            PhoneEntry::Closed => {
                info!(name = %record.name(), "Input closed during add, contact discarded");
                Ok(Ok(None))
            }
            PhoneEntry::Failed(e) => Ok(Err(e)),
        }
    }

    /// Prompt for phones until the user declines to add another.
    ///
    /// An invalid phone shows its validation message and asks again.
    fn collect_phones(&mut self, record: &mut Record) -> io::Result<PhoneEntry> {
        let mut failures = 0;

        loop {
            let Some(phone) = self.prompt(PROMPT_PHONE)? else {
                return Ok(PhoneEntry::Closed);
            };

            match record.add_phone(&phone) {
                Ok(()) => {
                    failures = 0;
                    let Some(answer) = self.prompt(PROMPT_ADD_MORE)? else {
                        return Ok(PhoneEntry::Closed);
                    };
                    if !answer.eq_ignore_ascii_case("yes") {
                        return Ok(PhoneEntry::Done);
                    }
                }
                Err(BookError::InvalidFormat(e)) => {
                    warn!(input = %phone, "Rejected phone number");
                    self.say(&e.to_string())?;

                    failures += 1;
                    if self.phone_retry_limit > 0 && failures >= self.phone_retry_limit {
                        warn!(attempts = failures, "Phone retry limit reached");
                        return Ok(PhoneEntry::GaveUp);
                    }
                }
                Err(e) => return Ok(PhoneEntry::Failed(e)),
            }
        }
    }

    fn find_contact(&mut self) -> io::Result<Outcome> {
        let Some(name) = self.prompt(PROMPT_FIND)? else {
            return Ok(Ok(None));
        };

        let message = match self.book.find(&name) {
            Some(record) => record.to_string(),
            None => MSG_CONTACT_NOT_FOUND.to_string(),
        };
        Ok(Ok(Some(message)))
    }

    fn delete_contact(&mut self) -> io::Result<Outcome> {
        let Some(name) = self.prompt(PROMPT_DELETE)? else {
            return Ok(Ok(None));
        };

        if !self.book.contains(&name) {
            return Ok(Ok(Some(MSG_CONTACT_NOT_FOUND.to_string())));
        }

        Ok(self
            .book
            .delete(&name)
            .map(|_| Some(MSG_CONTACT_DELETED.to_string())))
    }

    /// Write a prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

/// How phone entry for a new contact ended.
enum PhoneEntry {
    Done,
    GaveUp,
    Closed,
    Failed(BookError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, config: &Config) -> (AddressBook, String) {
        let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), config);
        session.run().unwrap();
        let (book, output) = session.into_parts();
        (book, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_respond_translates_errors() {
        let mut session = Session::new(Cursor::new(String::new()), Vec::new(), &Config::default());
        session
            .respond(Err(BookError::Unexpected("disk on fire".to_string())))
            .unwrap();
        session
            .respond(Err(BookError::ContactNotFound("Bob".to_string())))
            .unwrap();
        session.respond(Ok(None)).unwrap();

        let (_, output) = session.into_parts();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "An error occurred while processing your request.\nNo contact found with this name.\n"
        );
    }

    #[test]
    fn test_empty_name_is_invalid_input() {
        let (book, output) = run_script("add\n\nexit\n", &Config::default());
        assert!(book.is_empty());
        assert!(output.contains("Invalid input. Please provide a valid input.\n"));
    }

    #[test]
    fn test_retry_limit_abandons_add() {
        let config = Config {
            phone_retry_limit: 2,
            ..Config::default()
        };
        let (book, output) = run_script("add\nAlice\n1\n2\nexit\n", &config);
        assert!(book.is_empty());
        assert!(output.contains("Contact not added.\n"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_command_with_trailing_text_is_invalid() {
        let (book, output) = run_script(
            "exit now\nadd Alice\n0501234567\nno\nexit\n",
            &Config::default(),
        );

        assert!(book.is_empty());
        assert_eq!(
            output.matches("Invalid command. Please try again.\n").count(),
            4
        );
        assert!(!output.contains("Enter the name: "));
        assert!(!output.contains("Invalid number of arguments."));
        assert!(output.ends_with("Goodbye!\n"));
    }
}
