//! The Message entity: user-supplied text plus timestamp metadata.

use super::MessageId;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A stored message.
///
/// The entity carries the four raw attributes the system exposes: the
/// store-assigned identifier, the text, the creation timestamp, and the
/// last-edit timestamp. Derived "logic field" values are a pure function of
/// [`text`](Self::text) and are computed on demand by the field resolution
/// layer rather than stored here.
///
/// # Invariants
///
/// - `id` and `date_posted` never change after construction
/// - `date_edited >= date_posted` at all times
/// - every successful edit strictly increases `date_edited`
///
/// # Examples
///
/// ```
/// use missive::message::domain::{Message, MessageId};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let message = Message::new(MessageId::new(1), "Tomato", &clock);
/// assert_eq!(message.text(), "Tomato");
/// assert_eq!(message.date_posted(), message.date_edited());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Store-assigned identifier.
    id: MessageId,

    /// User-supplied content. Empty or blank text is valid content.
    text: String,

    /// When the message was created.
    date_posted: DateTime<Utc>,

    /// When the message was last edited; equals `date_posted` until the
    /// first edit.
    date_edited: DateTime<Utc>,
}

impl Message {
    /// Creates a new message with both timestamps taken from the clock.
    #[must_use]
    pub fn new(id: MessageId, text: impl Into<String>, clock: &impl Clock) -> Self {
        let posted_at = clock.utc();
        Self {
            id,
            text: text.into(),
            date_posted: posted_at,
            date_edited: posted_at,
        }
    }

    /// Returns a copy of this message with replaced text and a refreshed
    /// edit timestamp.
    ///
    /// The identifier and posting timestamp are preserved. Edit times are
    /// strictly increasing: a wall clock that has not advanced past the
    /// previous edit is clamped one nanosecond beyond it.
    #[must_use]
    pub fn edited(&self, text: impl Into<String>, edited_at: DateTime<Utc>) -> Self {
        let floor = self.date_edited + TimeDelta::nanoseconds(1);
        Self {
            id: self.id,
            text: text.into(),
            date_posted: self.date_posted,
            date_edited: edited_at.max(floor),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn date_posted(&self) -> DateTime<Utc> {
        self.date_posted
    }

    /// Returns the last-edit timestamp.
    #[must_use]
    pub const fn date_edited(&self) -> DateTime<Utc> {
        self.date_edited
    }
}
