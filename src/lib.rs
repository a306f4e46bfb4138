//! Missive: an in-memory message repository with derived field resolution.
//!
//! Clients create, fetch, replace, and delete short text messages, and can
//! query either raw stored attributes or computed "logic field" attributes
//! derived from a message's text.
//!
//! # Architecture
//!
//! Missive follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete port implementations (in-memory)
//! - **Services**: The [`message::services::MessageStore`] operation surface
//!
//! # Modules
//!
//! - [`message`]: The message entity, its storage contract, and the store
//!   service
//! - [`field`]: By-name access to raw and computed message attributes
//!
//! # Consistency
//!
//! Point lookups are immediately consistent: once a mutation returns, a
//! `get` of the same identifier observes it. Listing is eventually
//! consistent: newly created messages are indexed into the listing view by a
//! background worker and may lag by a bounded short interval.
//!
//! # Example
//!
//! ```
//! use missive::message::adapters::memory::InMemoryMessageRepository;
//! use missive::message::services::MessageStore;
//! use mockable::DefaultClock;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let store = MessageStore::new(
//!     Arc::new(InMemoryMessageRepository::new()),
//!     Arc::new(DefaultClock),
//! );
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().build()?;
//! let message = runtime.block_on(store.create("Pomegranate"))?;
//! assert_eq!(message.text(), "Pomegranate");
//! assert_eq!(message.date_posted(), message.date_edited());
//!
//! let fetched = runtime.block_on(store.get(message.id()))?;
//! assert_eq!(fetched.text(), "Pomegranate");
//! # Ok(())
//! # }
//! ```

pub mod field;
pub mod message;
