//! Tracing subscriber initialization.
//!
//! Stdout carries rendered transcripts, so logs go to a file instead.
//! Follow them with `tail -f` in another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Where the file appender writes: directory plus file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    /// Directory the appender writes into (created if missing).
    pub directory: PathBuf,
    /// Log file name inside `directory`.
    pub file_name: String,
}

/// Validate a log path and create its directory.
///
/// A bare file name (`chatv.log`) resolves to the current directory.
pub fn prepare_log_target(log_path: &Path) -> Result<LogTarget, LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => return Err(LoggingError::NoParentDirectory(log_path.to_path_buf())),
    };

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    Ok(LogTarget {
        directory,
        file_name: file_name.to_string(),
    })
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects RUST_LOG, defaults to "info". Creates the log directory if it
/// doesn't exist.
///
/// # Errors
///
/// Returns `LoggingError` if the path is unusable, the directory cannot be
/// created, or a subscriber was already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let target = prepare_log_target(log_path)?;

    let file_appender = tracing_appender::rolling::never(&target.directory, &target.file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn prepare_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("chatv_test_logs_prepare");
        let _ = fs::remove_dir_all(&test_dir);

        let target = prepare_log_target(&test_dir.join("nested").join("app.log"));
        let created = test_dir.join("nested").exists();

        // Cleanup
        let _ = fs::remove_dir_all(&test_dir);

        let target = target.expect("valid log path");
        assert_eq!(target.file_name, "app.log");
        assert!(created, "Log directory should be created");
    }

    #[test]
    fn prepare_bare_file_name_uses_current_directory() {
        let target = prepare_log_target(Path::new("chatv.log")).expect("valid log path");

        assert_eq!(target.directory, PathBuf::from("."));
        assert_eq!(target.file_name, "chatv.log");
    }

    #[test]
    fn prepare_rejects_path_without_file_name() {
        let result = prepare_log_target(Path::new("/"));

        assert!(
            matches!(result, Err(LoggingError::InvalidPath(_))),
            "Expected InvalidPath, got: {:?}",
            result
        );
    }

    #[test]
    fn prepare_reports_directory_creation_failure() {
        let test_dir = std::env::temp_dir().join("chatv_test_logs_blocked");
        let _ = fs::remove_dir_all(&test_dir);
        fs::create_dir_all(&test_dir).unwrap();
        let blocker = test_dir.join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = prepare_log_target(&blocker.join("app.log"));

        // Cleanup
        let _ = fs::remove_dir_all(&test_dir);

        assert!(
            matches!(result, Err(LoggingError::DirectoryCreation { .. })),
            "Expected DirectoryCreation, got: {:?}",
            result
        );
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory() {
        let test_dir = std::env::temp_dir().join("chatv_test_logs_init");
        let _ = fs::remove_dir_all(&test_dir);

        // May fail with SubscriberAlreadySet if another test initialized first
        let _ = init(&test_dir.join("test.log"));

        let exists = test_dir.exists();
        let _ = fs::remove_dir_all(&test_dir);

        assert!(exists, "Log directory should be created: {:?}", test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("chatv_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        let _ = init(&log_file);
        let second = init(&log_file);

        let _ = fs::remove_dir_all(&test_dir);

        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
    }
}
