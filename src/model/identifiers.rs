//! Message identifier newtype with a smart constructor.
//!
//! Ids are assigned by the parser in emission order starting at 1.
//! Zero is never a valid id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Identifier of a parsed message.
///
/// Stable across re-parses of unchanged input, which lets the star store
/// reference messages between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(NonZeroU64);

impl MessageId {
    /// The id of the first emitted message.
    pub const FIRST: MessageId = MessageId(NonZeroU64::MIN);

    /// Smart constructor: rejects zero.
    pub fn new(raw: u64) -> Result<Self, InvalidMessageId> {
        NonZeroU64::new(raw)
            .map(Self)
            .ok_or(InvalidMessageId::Zero)
    }

    /// The raw id value.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The id following this one in emission order.
    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for MessageId {
    type Error = InvalidMessageId;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

// ===== Error Types =====

/// Rejected raw value for `MessageId::new`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMessageId {
    /// Ids start at 1.
    #[error("Message ID must start at 1, got 0")]
    Zero,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_id_accepts_positive_value() {
        let id = MessageId::new(42);
        assert!(id.is_ok(), "Positive id should be accepted");
        assert_eq!(id.unwrap().get(), 42);
    }

    #[test]
    fn message_id_rejects_zero() {
        assert_eq!(MessageId::new(0), Err(InvalidMessageId::Zero));
    }

    #[test]
    fn message_id_first_is_one() {
        assert_eq!(MessageId::FIRST.get(), 1);
    }

    #[test]
    fn message_id_next_increments_by_one() {
        let id = MessageId::new(7).expect("valid id");
        assert_eq!(id.next().get(), 8);
    }

    #[test]
    fn message_id_display_is_bare_number() {
        let id = MessageId::new(123).expect("valid id");
        assert_eq!(id.to_string(), "123");
    }

    #[test]
    fn message_id_orders_numerically() {
        let a = MessageId::new(2).expect("valid id");
        let b = MessageId::new(10).expect("valid id");
        assert!(a < b, "Ids should compare numerically, not lexically");
    }

    #[test]
    fn message_id_serializes_as_plain_integer() {
        let id = MessageId::new(5).expect("valid id");
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
    }

    #[test]
    fn message_id_deserialize_rejects_zero() {
        let result = serde_json::from_str::<MessageId>("0");
        assert!(result.is_err(), "Zero should not deserialize into an id");
    }

    #[test]
    fn message_id_try_from_u64() {
        assert!(MessageId::try_from(1u64).is_ok());
        assert!(MessageId::try_from(0u64).is_err());
    }
}
