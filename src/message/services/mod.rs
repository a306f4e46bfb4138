//! Orchestration services for the message subsystem.

pub mod store;

pub use store::{Listing, MessageStore, MessageStoreError, MessageStoreResult};
