//! Repository port for message storage.
//!
//! Defines the abstract interface for storing and retrieving messages,
//! together with the consistency contract the store service relies on.

use crate::message::{
    domain::{Message, MessageId},
    error::RepositoryError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for message storage operations.
///
/// # Implementation Notes
///
/// Implementations must ensure:
///
/// - Identifier allocation is mutually exclusive: concurrent
///   [`next_message_id`](Self::next_message_id) calls never return the same
///   value, and an identifier is never re-issued once seen — including
///   identifiers chosen by callers via [`upsert`](Self::upsert).
/// - [`find_by_id`](Self::find_by_id) is immediately consistent: once any
///   mutation returns, a lookup of the affected identifier observes it.
/// - [`list_view`](Self::list_view) may lag behind insertion by a bounded
///   short interval, but never shows a deleted message or stale text.
/// - Concurrent access is handled safely, with no lock held across calls.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Allocates the next message identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage mechanism fails.
    async fn next_message_id(&self) -> RepositoryResult<MessageId>;

    /// Stores a newly created message under its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Duplicate`] if a live message already has
    /// the identifier, or `RepositoryError` if the storage mechanism fails.
    async fn store(&self, message: &Message) -> RepositoryResult<()>;

    /// Retrieves a message by its identifier.
    ///
    /// Returns `None` if no live message has the identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the lookup fails.
    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<Message>>;

    /// Returns the listing view of all live messages, in stable insertion
    /// order.
    ///
    /// The view is eventually consistent for insertions; callers needing
    /// strong visibility of a freshly stored message must use
    /// [`find_by_id`](Self::find_by_id).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the lookup fails.
    async fn list_view(&self) -> RepositoryResult<Vec<Message>>;

    /// Atomically replaces the text of a live message, refreshing its edit
    /// timestamp via [`Message::edited`].
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no live message has the
    /// identifier — replacement never creates.
    async fn update_text(
        &self,
        id: MessageId,
        text: String,
        edited_at: DateTime<Utc>,
    ) -> RepositoryResult<Message>;

    /// Stores the message under its caller-chosen identifier, replacing any
    /// occupant.
    ///
    /// When the identifier is free the message is stored as given and the
    /// allocator advances past it; when occupied, the occupant keeps its
    /// posting timestamp and takes the new text and edit time. Returns the
    /// stored state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage mechanism fails.
    async fn upsert(&self, message: &Message) -> RepositoryResult<Message>;

    /// Removes a message permanently. The identifier is never reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no live message has the
    /// identifier.
    async fn remove(&self, id: MessageId) -> RepositoryResult<()>;
}
