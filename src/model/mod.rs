//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod message;

// Re-export for convenience
pub use identifiers::{InvalidMessageId, MessageId};
pub use message::{Message, MessageHeader};
