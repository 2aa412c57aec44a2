//! Transcript parser for exported chat logs.
//!
//! This module provides pure parsing functions for converting the full text
//! of a chat export into an ordered list of `Message` records.
//!
//! Each line is classified as a header (opens a message) or not. Non-header
//! lines are appended to the open message, or dropped if no message has been
//! opened yet (export preamble). Parsing never fails.

pub mod classifier;
pub mod media;

pub use classifier::{classify, LineClass};
pub use media::{is_media_body, MEDIA_PLACEHOLDER};

use crate::model::{Message, MessageHeader, MessageId};
use tracing::debug;

/// Ordered sequence of finalized messages, in input line order.
pub type ParseResult = Vec<Message>;

/// Line accounting for one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Total lines seen.
    pub lines: usize,
    /// Lines that opened a message.
    pub headers: usize,
    /// Lines appended to an open message.
    pub continuations: usize,
    /// Lines dropped because no message was open yet.
    pub discarded: usize,
    /// Headers whose body was replaced by the media placeholder.
    pub media_omitted: usize,
}

/// Parse a complete transcript into messages.
///
/// Lines are split on `\n` and `\r\n`; a lone `\r` stays in the line.
/// A trailing line break leaves an empty last line, which continues the
/// open message like any other blank line. Ids run from 1 in emission
/// order, so identical input always yields identical ids.
pub fn parse(chat_text: &str) -> ParseResult {
    parse_with_stats(chat_text).0
}

/// Parse a transcript and also report how each line was handled.
pub fn parse_with_stats(chat_text: &str) -> (ParseResult, ParseStats) {
    let mut assembler = Assembler::new();
    for line in split_lines(chat_text) {
        assembler.feed(line);
    }
    let (messages, stats) = assembler.finish();

    debug!(
        lines = stats.lines,
        messages = messages.len(),
        continuations = stats.continuations,
        discarded = stats.discarded,
        media_omitted = stats.media_omitted,
        "Transcript parsed"
    );

    (messages, stats)
}

/// Split on `\n`, dropping the `\r` of each `\r\n` pair.
///
/// Unlike `str::lines`, text ending in a line break yields a final empty
/// line, and an unpaired `\r` at the very end is kept.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut pieces = text.split('\n').peekable();
    std::iter::from_fn(move || {
        let line = pieces.next()?;
        if pieces.peek().is_some() {
            Some(line.strip_suffix('\r').unwrap_or(line))
        } else {
            Some(line)
        }
    })
}

/// Message being assembled; not yet assigned an id.
#[derive(Debug)]
struct OpenMessage {
    date: String,
    time: String,
    sender: String,
    text: String,
}

impl OpenMessage {
    fn from_header(header: MessageHeader) -> Self {
        Self {
            date: header.date,
            time: header.time,
            sender: header.sender,
            text: media::normalize_body(header.body),
        }
    }

    fn append_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    fn finalize(self, id: MessageId) -> Message {
        Message::new(id, self.date, self.time, self.sender, self.text)
    }
}

/// Single-pass line state machine.
///
/// `current` is `None` until the first header, then always holds the
/// message that continuation lines extend.
#[derive(Debug)]
struct Assembler {
    messages: Vec<Message>,
    current: Option<OpenMessage>,
    next_id: MessageId,
    stats: ParseStats,
}

impl Assembler {
    fn new() -> Self {
        Self {
            messages: Vec::new(),
            current: None,
            next_id: MessageId::FIRST,
            stats: ParseStats::default(),
        }
    }

    fn feed(&mut self, line: &str) {
        self.stats.lines += 1;

        match classify(line) {
            LineClass::Header(header) => {
                self.stats.headers += 1;
                if media::is_media_body(&header.body) {
                    self.stats.media_omitted += 1;
                }
                self.close_current();
                self.current = Some(OpenMessage::from_header(header));
            }
            LineClass::NoMatch => match self.current.as_mut() {
                Some(open) => {
                    self.stats.continuations += 1;
                    open.append_line(line);
                }
                None => {
                    self.stats.discarded += 1;
                }
            },
        }
    }

    fn close_current(&mut self) {
        if let Some(open) = self.current.take() {
            let id = self.next_id;
            self.next_id = id.next();
            self.messages.push(open.finalize(id));
        }
    }

    fn finish(mut self) -> (ParseResult, ParseStats) {
        self.close_current();
        (self.messages, self.stats)
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
