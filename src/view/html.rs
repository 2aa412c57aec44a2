//! HTML rendering.
//!
//! Sender and text are user-controlled; both are escaped before they are
//! embedded in markup.

use crate::model::Message;
use std::io::{self, Write};

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Write one message as a `div.message` block.
pub fn write_message<W: Write>(out: &mut W, message: &Message, starred: bool) -> io::Result<()> {
    let class = if starred { "message starred" } else { "message" };
    let label = if starred { "Unstar" } else { "Star" };

    writeln!(
        out,
        r#"<div class="{}" data-id="{}"><div class="text"><strong>{}</strong>: {}</div><button>{}</button></div>"#,
        class,
        message.id(),
        escape_html(message.sender()),
        escape_html(message.text()),
        label,
    )
}
