//! In-memory message repository with an asynchronous listing index.
//!
//! The authoritative state is a single map guarded by one lock, so point
//! lookups observe every completed mutation immediately. The listing view is
//! a separate identifier sequence maintained by a dedicated indexer thread
//! draining a channel of index events; a freshly stored message therefore
//! becomes listable after a bounded short delay rather than synchronously.
//! The view reads through the authoritative map, so deletions and text
//! updates are never stale in listings regardless of indexer progress.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, RwLock, mpsc};
use std::thread;
use tracing::{trace, warn};

use crate::message::{
    domain::{Message, MessageId},
    error::RepositoryError,
    ports::{MessageRepository, RepositoryResult},
};

/// Thread-safe in-memory message repository.
///
/// Cloning is cheap and shares the underlying store; the indexer thread is
/// shared too and stops once every clone has been dropped.
#[derive(Debug, Clone)]
pub struct InMemoryMessageRepository {
    state: Arc<RwLock<StoreState>>,
    index: Arc<RwLock<Vec<MessageId>>>,
    events: mpsc::Sender<IndexEvent>,
}

#[derive(Debug, Default)]
struct StoreState {
    messages: HashMap<MessageId, Message>,
    /// Highest identifier ever seen; allocation continues past it and never
    /// revisits earlier values.
    last_id: i64,
}

/// Instruction for the listing indexer thread.
#[derive(Debug)]
enum IndexEvent {
    /// A newly stored message should join the listing view.
    Indexed(MessageId),
    /// A removed message should leave the listing view.
    Evicted(MessageId),
}

impl InMemoryMessageRepository {
    /// Creates an empty repository and starts its listing indexer.
    #[must_use]
    pub fn new() -> Self {
        let state = Arc::new(RwLock::new(StoreState::default()));
        let index = Arc::new(RwLock::new(Vec::new()));
        let (events, inbox) = mpsc::channel();
        let view = Arc::clone(&index);
        thread::spawn(move || run_indexer(&inbox, &view));
        Self {
            state,
            index,
            events,
        }
    }

    fn enqueue(&self, event: IndexEvent) -> RepositoryResult<()> {
        self.events
            .send(event)
            .map_err(|_unsent| persistence("listing indexer is not running"))
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains index events into the listing view until every sender is gone.
fn run_indexer(inbox: &mpsc::Receiver<IndexEvent>, view: &RwLock<Vec<MessageId>>) {
    while let Ok(event) = inbox.recv() {
        let Ok(mut ids) = view.write() else {
            warn!("listing view lock poisoned; indexer stopping");
            return;
        };
        match event {
            IndexEvent::Indexed(id) => {
                if !ids.contains(&id) {
                    ids.push(id);
                    trace!(%id, "message indexed for listing");
                }
            }
            IndexEvent::Evicted(id) => {
                ids.retain(|indexed| *indexed != id);
                trace!(%id, "message evicted from listing");
            }
        }
    }
    trace!("listing indexer stopped");
}

fn persistence(reason: &str) -> RepositoryError {
    RepositoryError::persistence(io::Error::other(reason.to_owned()))
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn next_message_id(&self) -> RepositoryResult<MessageId> {
        let mut state = self
            .state
            .write()
            .map_err(|err| persistence(&err.to_string()))?;
        state.last_id += 1;
        Ok(MessageId::new(state.last_id))
    }

    async fn store(&self, message: &Message) -> RepositoryResult<()> {
        {
            let mut state = self
                .state
                .write()
                .map_err(|err| persistence(&err.to_string()))?;
            if state.messages.contains_key(&message.id()) {
                return Err(RepositoryError::Duplicate(message.id()));
            }
            state.last_id = state.last_id.max(message.id().value());
            state.messages.insert(message.id(), message.clone());
        }
        self.enqueue(IndexEvent::Indexed(message.id()))
    }

    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<Message>> {
        let state = self
            .state
            .read()
            .map_err(|err| persistence(&err.to_string()))?;
        Ok(state.messages.get(&id).cloned())
    }

    async fn list_view(&self) -> RepositoryResult<Vec<Message>> {
        let ids = self
            .index
            .read()
            .map_err(|err| persistence(&err.to_string()))?
            .clone();
        let state = self
            .state
            .read()
            .map_err(|err| persistence(&err.to_string()))?;
        // Read through the live map so lagging index entries never surface
        // deleted messages or stale text.
        Ok(ids
            .iter()
            .filter_map(|id| state.messages.get(id).cloned())
            .collect())
    }

    async fn update_text(
        &self,
        id: MessageId,
        text: String,
        edited_at: DateTime<Utc>,
    ) -> RepositoryResult<Message> {
        let mut state = self
            .state
            .write()
            .map_err(|err| persistence(&err.to_string()))?;
        let current = state
            .messages
            .get(&id)
            .ok_or(RepositoryError::NotFound(id))?
            .clone();
        let updated = current.edited(text, edited_at);
        state.messages.insert(id, updated.clone());
        Ok(updated)
    }

    async fn upsert(&self, message: &Message) -> RepositoryResult<Message> {
        let (stored, freshly_created) = {
            let mut state = self
                .state
                .write()
                .map_err(|err| persistence(&err.to_string()))?;
            let occupant = state.messages.get(&message.id()).cloned();
            let (stored, freshly_created) = occupant.map_or_else(
                || (message.clone(), true),
                |current| (current.edited(message.text(), message.date_edited()), false),
            );
            state.last_id = state.last_id.max(stored.id().value());
            state.messages.insert(stored.id(), stored.clone());
            (stored, freshly_created)
        };
        if freshly_created {
            self.enqueue(IndexEvent::Indexed(stored.id()))?;
        }
        Ok(stored)
    }

    async fn remove(&self, id: MessageId) -> RepositoryResult<()> {
        {
            let mut state = self
                .state
                .write()
                .map_err(|err| persistence(&err.to_string()))?;
            if state.messages.remove(&id).is_none() {
                return Err(RepositoryError::NotFound(id));
            }
        }
        self.enqueue(IndexEvent::Evicted(id))
    }
}
