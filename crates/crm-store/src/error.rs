//! Store error types.

use crm_model::{CustomerId, UpdateError};
use thiserror::Error;

/// Customer store operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists for the given identity.
    #[error("no customer with id {id}")]
    NotFound { id: CustomerId },

    /// The normalized email is already owned by another record. This is the
    /// authoritative guard; the dispatcher's pre-check only improves the
    /// error message.
    #[error("email '{email}' already belongs to another customer")]
    EmailTaken { email: String },

    /// A record with this identity already exists.
    #[error("customer {id} already exists")]
    DuplicateId { id: CustomerId },

    /// The store lock was poisoned by a panicking writer.
    #[error("customer store lock poisoned")]
    LockPoisoned,
}

impl From<StoreError> for UpdateError {
    /// A save-time uniqueness rejection carries the same caller-facing
    /// message as the pre-check; everything else is a persistence failure.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmailTaken { .. } => UpdateError::EmailDuplicate,
            other => UpdateError::Persistence {
                reason: other.to_string(),
            },
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
