//! Error types for message storage and lookup.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants that
//! can be inspected by callers. Lookup misses share the single [`NotFound`]
//! kind; infrastructure failures are kept separate so boundaries can report
//! them differently.

use super::domain::MessageId;
use std::sync::Arc;
use thiserror::Error;

/// The single recoverable lookup failure.
///
/// Every "nothing there" condition in the system funnels into this one
/// kind: an identifier no live message has (whether deleted, never
/// allocated, or negative), an unknown raw field name, or an unknown logic
/// field name. The variants exist for diagnostics only; boundaries treat
/// them uniformly as a not-found signal with no body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    /// No live message has this identifier.
    #[error("message {0} not found")]
    Message(MessageId),

    /// The name matches no stored attribute.
    #[error("no raw field named '{0}'")]
    RawField(String),

    /// The name matches no computed attribute.
    #[error("no logic field named '{0}'")]
    LogicField(String),
}

/// Errors that can occur inside repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The message was not found.
    #[error("message {0} not found")]
    NotFound(MessageId),

    /// A message with this identifier already exists.
    #[error("duplicate message: {0}")]
    Duplicate(MessageId),

    /// The storage mechanism itself failed.
    #[error("storage failure: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Creates a persistence error from any error type.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
