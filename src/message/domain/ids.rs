//! Identifier newtype for the message domain.
//!
//! Wrapping the integer prevents accidental mixing with other numeric values
//! and keeps the allocation policy (store-assigned, monotonic, never reused)
//! out of callers' hands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a message.
///
/// Identifiers are assigned by the store at creation, increase
/// monotonically, and are never reassigned after deletion. Values that were
/// never allocated — including negative ones arriving from a boundary — are
/// simply identifiers that no live message has.
///
/// # Examples
///
/// ```
/// use missive::message::domain::MessageId;
///
/// let id = MessageId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i64);

impl MessageId {
    /// Creates a message identifier from a raw integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
