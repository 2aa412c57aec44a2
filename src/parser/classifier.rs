//! Header line classification.
//!
//! A header line looks like `1/1/23, 9:05 PM - Alice: hello`. Everything
//! else is a continuation of the previous message (or preamble).

use crate::model::MessageHeader;
use regex::Regex;
use std::sync::LazyLock;

/// Anchored header pattern, compiled once.
///
/// Capture groups: 1 date, 2 time, 3 optional AM/PM marker, 4 sender, 5 body.
/// Digit classes are ASCII only; `\s` separators also accept the narrow
/// no-break space some exports put before the marker.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}),\s([0-9]{1,2}:[0-9]{2})(?:\s?((?i:AM|PM)))?\s-\s([^:]+):\s(.*)$",
    )
    .expect("header pattern is a valid regex")
});

/// Result of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// The line opens a new message.
    Header(MessageHeader),
    /// The line continues the open message, or is preamble if none is open.
    NoMatch,
}

impl LineClass {
    /// True for `LineClass::Header`.
    pub fn is_header(&self) -> bool {
        matches!(self, LineClass::Header(_))
    }
}

/// Classify one raw line (without its line terminator).
///
/// Pure function of the line's text. The returned body is the raw captured
/// text; media substitution is the parser's job.
pub fn classify(line: &str) -> LineClass {
    let Some(caps) = HEADER_PATTERN.captures(line) else {
        return LineClass::NoMatch;
    };

    let time = match caps.get(3) {
        Some(marker) => format!("{} {}", &caps[2], marker.as_str()),
        None => caps[2].to_string(),
    };

    LineClass::Header(MessageHeader {
        date: caps[1].to_string(),
        time,
        sender: caps[4].to_string(),
        body: caps[5].to_string(),
    })
}
