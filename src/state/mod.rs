//! Viewer state derived from parsed messages.
//!
//! Search filtering and the starred set. Both are pure; the star store in
//! `crate::store` handles persistence.

pub mod search;
pub mod starred;

pub use search::{filter_messages, filter_starred, SearchQuery};
pub use starred::StarredIds;
