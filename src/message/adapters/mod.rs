//! Storage adapters for the message module.
//!
//! This module provides concrete implementations of the
//! [`MessageRepository`] port, following hexagonal architecture principles.
//! Adapters handle all infrastructure concerns while the domain remains
//! pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryMessageRepository`]: thread-safe in-memory storage
//!   with an asynchronously maintained listing view. No persistent adapter
//!   exists; the store's extent is the process's lifetime.
//!
//! [`MessageRepository`]: crate::message::ports::repository::MessageRepository

pub mod memory;
