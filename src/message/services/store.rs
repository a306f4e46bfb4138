//! The message store service: identity, CRUD, timestamps, and field access.

use crate::field::FieldResolver;
use crate::message::{
    domain::{Message, MessageId},
    error::{NotFound, RepositoryError},
    ports::MessageRepository,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for store operations.
#[derive(Debug, Error)]
pub enum MessageStoreError {
    /// The requested message or field does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// The repository infrastructure failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

/// Repository lookup misses collapse into the single recoverable
/// [`NotFound`] kind; only infrastructure failures stay distinct.
impl From<RepositoryError> for MessageStoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound(NotFound::Message(id)),
            other => Self::Repository(other),
        }
    }
}

/// Result type for store service operations.
pub type MessageStoreResult<T> = Result<T, MessageStoreError>;

/// Outcome of listing all live messages.
///
/// Zero messages is a distinguishable, successful outcome rather than an
/// error; boundaries that report the empty case differently from the
/// populated case branch on the variant. The listing reflects insertions
/// with a bounded short delay (see
/// [`MessageStore::list_all`]); deletions and edits are never stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// No live messages were indexed at the time of the call.
    Empty,
    /// At least one live message, in stable insertion order.
    Messages(Vec<Message>),
}

impl Listing {
    /// Builds the cardinality-explicit outcome from a raw sequence.
    #[must_use]
    pub fn from_messages(messages: Vec<Message>) -> Self {
        if messages.is_empty() {
            Self::Empty
        } else {
            Self::Messages(messages)
        }
    }

    /// Returns the listed messages; empty slice for [`Listing::Empty`].
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        match self {
            Self::Empty => &[],
            Self::Messages(messages) => messages,
        }
    }

    /// Returns `true` when no messages were listed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the number of listed messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages().len()
    }

    /// Consumes the listing, yielding the message sequence.
    #[must_use]
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Self::Empty => Vec::new(),
            Self::Messages(messages) => messages,
        }
    }
}

/// The authoritative, concurrency-safe collection of messages.
///
/// Owns identity allocation, timestamp semantics, and the visibility rules
/// around creation and listing; delegates raw-versus-computed field lookup
/// to its [`FieldResolver`]. All operations are safe to invoke
/// concurrently.
#[derive(Clone)]
pub struct MessageStore<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    resolver: FieldResolver,
}

impl<R, C> MessageStore<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    /// Creates a store service over a repository and a clock.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            resolver: FieldResolver::new(),
        }
    }

    /// Creates a new message and returns it.
    ///
    /// The message receives the next free identifier and equal posting and
    /// edit timestamps. Creation never fails for well-formed text — empty
    /// or blank text is stored as given. The result is immediately visible
    /// to [`get`](Self::get); [`list_all`](Self::list_all) may lag briefly.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Repository`] only when the storage
    /// mechanism itself fails.
    pub async fn create(&self, text: impl Into<String>) -> MessageStoreResult<Message> {
        let content = text.into();
        loop {
            let id = self.repository.next_message_id().await?;
            let message = Message::new(id, content.clone(), &*self.clock);
            match self.repository.store(&message).await {
                Ok(()) => {
                    debug!(%id, "message created");
                    return Ok(message);
                }
                // A put with a caller-chosen identifier can land on a value
                // between our allocation and store; allocate again past it.
                Err(RepositoryError::Duplicate(_)) => {}
                Err(other) => return Err(other.into()),
            }
        }
    }

    /// Fetches a message by identifier. Immediately consistent.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::Message`] when no live message has the
    /// identifier — deleted, never allocated, and negative identifiers
    /// alike.
    pub async fn get(&self, id: MessageId) -> MessageStoreResult<Message> {
        let found = self.repository.find_by_id(id).await?;
        Ok(found.ok_or_else(|| NotFound::Message(id))?)
    }

    /// Lists all live messages.
    ///
    /// The listing is eventually consistent for creations: a just-created
    /// message appears after a bounded short interval. Callers needing
    /// strong visibility must poll [`get`](Self::get) instead. Cardinality
    /// is explicit in the returned [`Listing`].
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Repository`] when the storage mechanism
    /// fails.
    pub async fn list_all(&self) -> MessageStoreResult<Listing> {
        let messages = self.repository.list_view().await?;
        Ok(Listing::from_messages(messages))
    }

    /// Replaces the text of an existing message.
    ///
    /// The identifier and posting timestamp are preserved; the edit
    /// timestamp strictly advances. Never creates.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::Message`] when no live message has the
    /// identifier.
    pub async fn update(
        &self,
        id: MessageId,
        new_text: impl Into<String>,
    ) -> MessageStoreResult<Message> {
        let updated = self
            .repository
            .update_text(id, new_text.into(), self.clock.utc())
            .await?;
        debug!(%id, "message updated");
        Ok(updated)
    }

    /// Stores text under a caller-chosen identifier, creating or replacing.
    ///
    /// The idempotent "put" entry point: a free identifier is claimed (and
    /// never handed out again by [`create`](Self::create)); an occupied one
    /// keeps its posting timestamp and takes the new text. Contrast with
    /// [`update`](Self::update), which refuses to create.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Repository`] when the storage mechanism
    /// fails.
    pub async fn put(
        &self,
        id: MessageId,
        text: impl Into<String>,
    ) -> MessageStoreResult<Message> {
        let candidate = Message::new(id, text, &*self.clock);
        let stored = self.repository.upsert(&candidate).await?;
        debug!(%id, "message put");
        Ok(stored)
    }

    /// Deletes a message permanently. The identifier is never reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::Message`] when no live message has the
    /// identifier — including one already deleted.
    pub async fn delete(&self, id: MessageId) -> MessageStoreResult<()> {
        self.repository.remove(id).await?;
        debug!(%id, "message deleted");
        Ok(())
    }

    /// Fetches a stored attribute of a message in canonical string form.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::Message`] for an unknown identifier and
    /// [`NotFound::RawField`] for a name outside the raw-field set.
    pub async fn raw_field(&self, id: MessageId, name: &str) -> MessageStoreResult<String> {
        let message = self.get(id).await?;
        let value = self.resolver.raw_field(&message, name);
        Ok(value.ok_or_else(|| NotFound::RawField(name.to_owned()))?)
    }

    /// Computes a logic field of a message.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::Message`] for an unknown identifier and
    /// [`NotFound::LogicField`] for a name outside the logic catalog.
    pub async fn logic_field(&self, id: MessageId, name: &str) -> MessageStoreResult<String> {
        let message = self.get(id).await?;
        let value = self.resolver.logic_field(&message, name);
        Ok(value.ok_or_else(|| NotFound::LogicField(name.to_owned()))?)
    }
}
