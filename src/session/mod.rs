//! Interactive text session for the contact book.
//!
//! The session reads commands line by line, drives the address book, and is
//! the one place where failures are turned into user-facing messages.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::Session;

use crate::config::Config;
use anyhow::Result;
use std::io;

/// Run a session on the process's stdin and stdout.
///
/// Returns once the user exits or stdin closes.
pub fn run_session(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()?;
    Ok(())
}
