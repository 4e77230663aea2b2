use serde::{Deserialize, Serialize};

/// Errors returned by monitor operations.
///
/// `NotImplemented` is the critical variant for stub-first development — every
/// operation starts as a stub returning this, then gets replaced with a call
/// into a real monitor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MonitorError {
    #[error("not implemented: {method}")]
    NotImplemented { method: String },

    #[error("unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl MonitorError {
    /// Returns `true` for transient errors that may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Convenience constructor for `NotImplemented`.
    pub fn not_implemented(method: impl Into<String>) -> Self {
        Self::NotImplemented {
            method: method.into(),
        }
    }
}
