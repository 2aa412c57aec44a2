//! Error types for the chatv application.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all shell failures
//!   - [`InputError`] - Transcript file/stdin reading failures
//!   - [`StoreError`] - Star store persistence failures
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Writing rendered output
//!
//! # What is not an error
//!
//! The transcript parser is total. Lines that do not look like a message header are
//! continuation lines or discarded preamble, and empty input is an empty transcript.
//! Nothing in this module is produced by `parser::parse`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes of the shell.
///
/// # Examples
///
/// ```no_run
/// use chatv::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _text = read_transcript()?;
///     Ok(())
/// }
/// # fn read_transcript() -> Result<String, InputError> { Ok(String::new()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the transcript from file or stdin.
    ///
    /// Fatal: there is nothing to show without input.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to persist or update the starred message set.
    #[error("Star store error: {0}")]
    Store(#[from] StoreError),

    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// Writing rendered output failed (closed pipe, full disk).
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors encountered when reading transcript input from files or stdin.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Display error and exit (user provided invalid path)
/// - **NoInput**: Display usage - user must provide file path or pipe stdin
/// - **Io**: Generic I/O failures (permissions, disk errors) - display and exit
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified transcript file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use chatv::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided.
    ///
    /// Occurs when no file path is given and stdin is an interactive terminal, so
    /// reading it would block waiting for the user to type a transcript.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when persisting the starred message set.
///
/// Loading never fails (see `store::StarStore::load`); only writes surface errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file exists but could not be read.
    #[error("Failed to read star store at {path:?}: {source}")]
    Read {
        /// Path of the store file or directory.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The store file could not be written.
    #[error("Failed to write star store at {path:?}: {source}")]
    Write {
        /// Path of the store file or directory.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The directory holding the store file could not be created.
    #[error("Failed to create star store directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Path of the store file or directory.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The id set could not be encoded as JSON.
    #[error("Failed to encode starred ids: {0}")]
    Serialize(#[from] serde_json::Error),
}
