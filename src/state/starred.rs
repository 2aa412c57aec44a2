//! Starred message set.
//!
//! Pure set logic; persistence lives in `crate::store`.

use crate::model::MessageId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of starred message ids.
///
/// Ordered so the persisted form is stable between saves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarredIds(BTreeSet<MessageId>);

impl StarredIds {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is starred.
    pub fn contains(&self, id: MessageId) -> bool {
        self.0.contains(&id)
    }

    /// Mark as starred. Returns false if it already was.
    pub fn star(&mut self, id: MessageId) -> bool {
        self.0.insert(id)
    }

    /// Remove the star. Returns false if it was not starred.
    pub fn unstar(&mut self, id: MessageId) -> bool {
        self.0.remove(&id)
    }

    /// Flip the star and return the new state (true = starred).
    pub fn toggle(&mut self, id: MessageId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    /// Starred ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = MessageId> + '_ {
        self.0.iter().copied()
    }

    /// Number of starred ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is starred.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<MessageId> for StarredIds {
    fn from_iter<I: IntoIterator<Item = MessageId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
