//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces that the domain requires from
//! infrastructure. Adapters implement these ports to connect the domain to
//! concrete storage.

pub mod repository;

pub use repository::{MessageRepository, RepositoryResult};
