//! Error types for the execution-provider boundary.
//!
//! Building a specification never fails: malformed client input
//! degrades to "no filter applied" by design. Errors only arise when a
//! provider runs the resulting plan against real storage.

use thiserror::Error;

/// Error raised by an execution provider while running a query plan.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The underlying storage engine failed.
    #[error("provider error: {0}")]
    Provider(String),

    /// The plan uses a feature this provider cannot translate.
    #[error("unsupported plan feature: {0}")]
    Unsupported(String),
}

impl QueryError {
    /// Create a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Create an unsupported-feature error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}
