//! By-name access to a message's raw and computed attributes.
//!
//! Two disjoint namespaces are served from fixed lookup tables built at
//! initialisation: raw fields are the stored attributes of a
//! [`Message`](crate::message::domain::Message) in canonical string form,
//! and logic fields are pure computations over its text. Unknown names in
//! either namespace resolve to `None`; neither namespace ever answers for
//! the other.

pub(crate) mod logic;
mod resolver;

pub use resolver::FieldResolver;

#[cfg(test)]
mod tests;
