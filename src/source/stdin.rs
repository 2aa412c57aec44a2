//! Stdin-based transcript source for piped input.
//!
//! Provides StdinSource for reading a complete transcript from stdin, as in
//! `cat chat.txt | chatv`.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Stdin source for piped transcript input.
///
/// Reads to EOF in one go; the parser needs the whole text.
#[derive(Debug)]
pub struct StdinSource<R: Read = std::io::Stdin> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
    /// This prevents blocking on user input when nothing was piped.
    pub fn new() -> Result<Self, InputError> {
        if Self::is_tty() {
            return Err(InputError::NoInput);
        }

        Ok(Self {
            reader: std::io::stdin(),
        })
    }

    /// Check if stdin is a TTY (interactive terminal).
    fn is_tty() -> bool {
        std::io::stdin().is_terminal()
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader.
    ///
    /// Bypasses the TTY check; used by tests and by callers that already
    /// hold a reader.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read everything until EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors.
    pub fn read_bytes(mut self) -> Result<Vec<u8>, InputError> {
        let mut buffer = Vec::new();
        self.reader.read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}
