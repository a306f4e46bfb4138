//! Name-to-value resolution over the two field namespaces.

use super::logic;
use crate::message::domain::Message;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::{BTreeMap, HashMap};

/// Accessor returning a stored attribute in canonical string form.
type RawAccessor = fn(&Message) -> String;

/// Pure computation from message text to a logic-field value.
type LogicRule = fn(&str) -> String;

/// Uniform by-name access to a message's attributes.
///
/// The resolver never mutates a message and holds no per-message state; it
/// is two lookup tables, fixed at construction. Raw names address the
/// stored attributes (`id`, `text`, `datePosted`, `dateEdited`); logic
/// names address the computed catalog. The namespaces are disjoint: a raw
/// lookup of a logic name misses, and vice versa. Lookups are exact — no
/// partial or case-insensitive matching.
///
/// # Examples
///
/// ```
/// use missive::field::FieldResolver;
/// use missive::message::domain::{Message, MessageId};
/// use mockable::DefaultClock;
///
/// let resolver = FieldResolver::new();
/// let message = Message::new(MessageId::new(1), "Potato", &DefaultClock);
///
/// assert_eq!(resolver.raw_field(&message, "text").as_deref(), Some("Potato"));
/// assert_eq!(resolver.logic_field(&message, "palindrome").as_deref(), Some("false"));
/// assert_eq!(resolver.raw_field(&message, "friends"), None);
/// assert_eq!(resolver.logic_field(&message, "text"), None);
/// ```
#[derive(Debug, Clone)]
pub struct FieldResolver {
    raw: HashMap<&'static str, RawAccessor>,
    logic: HashMap<&'static str, LogicRule>,
}

impl FieldResolver {
    /// Builds the resolver with its full field tables.
    #[must_use]
    pub fn new() -> Self {
        let raw = HashMap::from([
            ("id", raw_id as RawAccessor),
            ("text", raw_text),
            ("datePosted", raw_date_posted),
            ("dateEdited", raw_date_edited),
        ]);
        let logic = HashMap::from([
            ("palindrome", logic::palindrome as LogicRule),
            ("blank", logic::blank),
            ("shouting", logic::shouting),
            ("wordCount", logic::word_count),
        ]);
        Self { raw, logic }
    }

    /// Resolves a stored attribute by name.
    ///
    /// Returns `None` for any name outside the fixed raw-field set,
    /// including logic-field names.
    #[must_use]
    pub fn raw_field(&self, message: &Message, name: &str) -> Option<String> {
        self.raw.get(name).map(|accessor| accessor(message))
    }

    /// Resolves a computed attribute by name.
    ///
    /// Returns `None` for any name outside the logic catalog, including
    /// raw-field names.
    #[must_use]
    pub fn logic_field(&self, message: &Message, name: &str) -> Option<String> {
        self.logic.get(name).map(|rule| rule(message.text()))
    }

    /// Computes the full derived mapping of logic-field names to values.
    ///
    /// Boundaries that serialise a message's `logicFields` attribute build
    /// it from this projection; the ordering is deterministic.
    #[must_use]
    pub fn logic_fields(&self, message: &Message) -> BTreeMap<&'static str, String> {
        self.logic
            .iter()
            .map(|(name, rule)| (*name, rule(message.text())))
            .collect()
    }
}

impl Default for FieldResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical string form for timestamps: RFC 3339 with a `Z` suffix,
/// identical to the chrono serde wire form of the attribute.
fn canonical_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn raw_id(message: &Message) -> String {
    message.id().to_string()
}

fn raw_text(message: &Message) -> String {
    message.text().to_owned()
}

fn raw_date_posted(message: &Message) -> String {
    canonical_timestamp(message.date_posted())
}

fn raw_date_edited(message: &Message) -> String {
    canonical_timestamp(message.date_edited())
}
