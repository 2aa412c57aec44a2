//! Transcript input sources.
//!
//! This module provides input sources for raw transcript text:
//! - File loading for a path argument
//! - Stdin for piped input
//! - Unified InputSource enum for both
//!
//! Sources hand the parser a decoded string; the parser never does I/O.

use crate::model::error::InputError;
use std::path::PathBuf;
use tracing::{info, warn};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// UTF-8 byte-order mark some exporters prepend.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Unified input source for transcript text.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File source - path given on the command line
    File(FileSource),
    /// Stdin source - reads from piped stdin
    Stdin(StdinSource),
}

impl InputSource {
    /// Human-readable origin, for logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }

    /// Read the complete transcript as text.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors or a file that disappeared.
    pub fn read_text(self) -> Result<String, InputError> {
        let origin = self.describe();
        let bytes = match self {
            InputSource::File(f) => f.read_bytes()?,
            InputSource::Stdin(s) => s.read_bytes()?,
        };

        info!(source = %origin, bytes = bytes.len(), "Transcript read");
        Ok(decode_text(&bytes, &origin))
    }
}

/// Decode raw transcript bytes into text.
///
/// Strips a leading UTF-8 byte-order mark so the first header line still
/// matches. Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn decode_text(bytes: &[u8], origin: &str) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            warn!(
                source = %origin,
                valid_up_to = e.valid_up_to(),
                "Transcript is not valid UTF-8; replacing invalid sequences"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource
/// 2. Else if stdin is piped: use StdinSource
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
/// Returns `InputError::FileNotFound` if the file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
