//! Message search.
//!
//! Case-insensitive substring filter over sender and text. A pure function
//! of the parsed messages; nothing here touches the parser.

use crate::model::Message;
use crate::state::starred::StarredIds;

// ===== SearchQuery =====

/// Validated search query. Never empty.
///
/// Whitespace-only input is a real query (it matches messages containing
/// that whitespace); only the empty string means "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    /// Smart constructor: returns None if the query is empty.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return None;
        }
        let lowered = raw.to_lowercase();
        Some(Self { raw, lowered })
    }

    /// The query as the user typed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the message's sender or text contains the query, ignoring case.
    pub fn matches(&self, message: &Message) -> bool {
        message.text().to_lowercase().contains(&self.lowered)
            || message.sender().to_lowercase().contains(&self.lowered)
    }
}

// ===== Filtering =====

/// Filter messages by an optional query, preserving order.
///
/// `None` returns every message.
pub fn filter_messages<'a>(messages: &'a [Message], query: Option<&SearchQuery>) -> Vec<&'a Message> {
    match query {
        Some(query) => messages.iter().filter(|m| query.matches(m)).collect(),
        None => messages.iter().collect(),
    }
}

/// Keep only starred messages, preserving order.
pub fn filter_starred<'a>(messages: Vec<&'a Message>, starred: &StarredIds) -> Vec<&'a Message> {
    messages
        .into_iter()
        .filter(|m| starred.contains(m.id()))
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
