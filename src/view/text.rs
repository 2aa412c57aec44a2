//! Plain-text rendering for terminals and pipes.

use crate::model::Message;
use std::io::{self, Write};

const CONTINUATION_INDENT: &str = "    ";

/// Write one message: a header line, then continuation lines indented.
pub fn write_message<W: Write>(out: &mut W, message: &Message, starred: bool) -> io::Result<()> {
    let marker = if starred { "[*]" } else { "[ ]" };
    let mut lines = message.lines();
    let first = lines.next().unwrap_or_default();

    writeln!(
        out,
        "{} #{} {} {} {}: {}",
        marker,
        message.id(),
        message.date(),
        message.time(),
        message.sender(),
        first,
    )?;

    for line in lines {
        writeln!(out, "{}{}", CONTINUATION_INDENT, line)?;
    }
    Ok(())
}
