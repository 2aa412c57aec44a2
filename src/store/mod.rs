//! Persisted star store.
//!
//! Starred ids live in a small JSON file (`[1, 4, 9]`). Ids come from
//! emission order, so they stay valid across re-parses of the same
//! transcript.

use crate::model::error::StoreError;
use crate::model::MessageId;
use crate::state::StarredIds;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed set of starred message ids.
#[derive(Debug, Clone)]
pub struct StarStore {
    path: PathBuf,
}

impl StarStore {
    /// Store backed by the JSON file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the starred set.
    ///
    /// Never fails: a missing file is an empty set, and an unreadable or
    /// corrupt file is logged and also treated as empty so the viewer keeps
    /// working.
    pub fn load(&self) -> StarredIds {
        match self.try_load() {
            Ok(Some(ids)) => {
                debug!(path = ?self.path, count = ids.len(), "Starred ids loaded");
                ids
            }
            Ok(None) => StarredIds::new(),
            Err(error) => {
                warn!(path = ?self.path, %error, "Ignoring unreadable star store");
                StarredIds::new()
            }
        }
    }

    /// Load, distinguishing a missing file (`Ok(None)`) from a bad one.
    fn try_load(&self) -> Result<Option<StarredIds>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Persist the starred set, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory or file cannot be written.
    pub fn save(&self, ids: &StarredIds) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string(ids)?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = ?self.path, count = ids.len(), "Starred ids saved");
        Ok(())
    }

    /// Toggle one id and persist. Returns the new state (true = starred).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if saving fails.
    pub fn toggle(&self, id: MessageId) -> Result<bool, StoreError> {
        let mut ids = self.load();
        let starred = ids.toggle(id);
        self.save(&ids)?;
        Ok(starred)
    }
}
