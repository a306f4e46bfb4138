//! The message subsystem: entity, storage contract, and store service.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::MessageId`])
//! - **Ports**: Abstract trait interfaces ([`ports::repository::MessageRepository`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryMessageRepository`])
//! - **Services**: Orchestration ([`services::MessageStore`])
//!
//! # Example
//!
//! ```
//! use missive::message::domain::{Message, MessageId};
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let message = Message::new(MessageId::new(1), "Hello, Missive!", &clock);
//! assert_eq!(message.text(), "Hello, Missive!");
//! assert_eq!(message.date_posted(), message.date_edited());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
