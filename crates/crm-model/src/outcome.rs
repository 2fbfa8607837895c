//! Update outcome and error types.
//!
//! A field update reports failure as data: the request layer checks for the
//! `error` key instead of catching anything. The `Display` strings on
//! [`UpdateError`] are the exact caller-facing messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a field update was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    /// The field name is not in the dispatch table.
    #[error("Unknown field: '{field}'")]
    UnknownField { field: String },

    /// The email was empty after trimming.
    #[error("You need to specify an email for this customer.")]
    EmailBlank,

    /// The email failed format validation. Carries the original raw input,
    /// not the normalized form.
    #[error("Can't save email. Invalid value: '{value}'")]
    EmailInvalid { value: String },

    /// Another record already owns the normalized email.
    #[error("Email already exists.")]
    EmailDuplicate,

    /// The store rejected the write for a reason outside the update
    /// taxonomy (unavailable, poisoned lock, missing record).
    #[error("Failed to save customer: {reason}")]
    Persistence { reason: String },
}

/// Result of a single field update, shaped for the request layer.
///
/// Serializes to `{}` on success and `{"error": "<message>"}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateOutcome {
    /// The empty success marker.
    pub fn ok() -> Self {
        Self { error: None }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<UpdateError> for UpdateOutcome {
    fn from(err: UpdateError) -> Self {
        Self {
            error: Some(err.to_string()),
        }
    }
}
