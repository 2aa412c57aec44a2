//! Message types produced by the transcript parser.
//!
//! A `MessageHeader` is what the line classifier extracts from a single
//! header line. A `Message` is the finalized record: header fields plus
//! the merged text and an emission-order id.

use crate::model::MessageId;
use serde::Serialize;

// ===== MessageHeader =====

/// Fields extracted from one header line.
///
/// `date`, `time` and `sender` are verbatim substrings of the line. `time`
/// carries the AM/PM marker when the line had one. `body` is the raw text
/// after `sender: `, before any media substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    /// Date as written, e.g. `1/1/23`.
    pub date: String,
    /// Time as written, plus ` AM`/` PM` when present.
    pub time: String,
    /// Text between ` - ` and the first `:`.
    pub sender: String,
    /// Raw text after `sender: `.
    pub body: String,
}

// ===== Message =====

/// A finalized chat message.
///
/// Fields are private: once the parser emits a message nothing can alter
/// its sender, timestamp, or text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    id: MessageId,
    date: String,
    time: String,
    sender: String,
    text: String,
}

impl Message {
    /// Create a message record.
    ///
    /// The parser is the usual producer; this is public so callers can
    /// build fixtures and benchmark data.
    pub fn new(
        id: MessageId,
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Emission-order id, starting at 1.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Date exactly as written in the transcript (e.g. `"1/1/23"`).
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Time exactly as written, with the AM/PM marker appended if present.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Sender name exactly as written.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Body text with continuation lines joined by `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate over the lines of the message text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}
