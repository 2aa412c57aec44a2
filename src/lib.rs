//! Chat transcript viewer (chatv)
//!
//! Parses exported chat transcripts into ordered message records and
//! provides the pieces a viewer needs around them: input sources, a
//! persisted star set, search filtering, and renderers.
//!
//! The parser is the pure core; everything else is the impure shell.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod store;
pub mod view;

pub use model::{Message, MessageHeader, MessageId};
pub use parser::{classify, parse, parse_with_stats, LineClass, ParseResult, ParseStats};
