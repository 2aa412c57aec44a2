//! Output rendering for parsed messages.
//!
//! Renderers consume message records and the starred set and write to any
//! `io::Write`. The CLI passes stdout; tests pass a `Vec<u8>`.

pub mod html;
pub mod text;

pub use html::escape_html;

use crate::model::Message;
use crate::state::StarredIds;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Output format selected by config or `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One block per message, continuation lines indented
    #[default]
    Text,
    /// `div.message` blocks with escaped content
    Html,
    /// Pretty-printed JSON array
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Error for an unrecognized output format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown output format '{0}' (expected text, html, or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// JSON shape: the message fields plus its star state.
#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(flatten)]
    message: &'a Message,
    starred: bool,
}

/// Render messages in the given format.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render<W: Write>(
    out: &mut W,
    messages: &[&Message],
    starred: &StarredIds,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for message in messages {
                text::write_message(out, message, starred.contains(message.id()))?;
            }
        }
        OutputFormat::Html => {
            for message in messages {
                html::write_message(out, message, starred.contains(message.id()))?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<JsonEntry<'_>> = messages
                .iter()
                .map(|message| JsonEntry {
                    message,
                    starred: starred.contains(message.id()),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
