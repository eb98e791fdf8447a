//! Parsing of command lines typed at the session prompt.

/// A command entered at the top-level prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Find,
    Delete,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse an input line.
    ///
    /// The whole trimmed, lowercased line must equal a command word; anything
    /// else, including a command word followed by more text, is `Unknown`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "add" => Self::Add,
            "find" => Self::Find,
            "delete" => Self::Delete,
            "exit" => Self::Exit,
            _ => Self::Unknown(line),
        }
    }
}
