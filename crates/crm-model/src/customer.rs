use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a customer record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CustomerId(pub u64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer profile record.
///
/// `email` is globally unique under normalization (trimmed, lowercased);
/// the store's email index enforces that invariant. `created_at` and
/// `updated_at` are store-managed and never written by field updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
    /// Cleared whenever the email changes; untouched by every other field.
    pub verified: bool,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub title: String,
    pub role: String,
    pub score: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a record with the given identity and email; all free-text
    /// fields start empty, `verified` false, `score` zero.
    pub fn new(id: CustomerId, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            verified: false,
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            title: String::new(),
            role: String::new(),
            score: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = value.into();
        self
    }

    #[must_use]
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = value.into();
        self
    }

    #[must_use]
    pub fn with_phone(mut self, value: impl Into<String>) -> Self {
        self.phone = value.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    #[must_use]
    pub fn with_role(mut self, value: impl Into<String>) -> Self {
        self.role = value.into();
        self
    }

    #[must_use]
    pub fn with_score(mut self, value: u32) -> Self {
        self.score = value;
        self
    }

    #[must_use]
    pub fn with_verified(mut self, value: bool) -> Self {
        self.verified = value;
        self
    }
}
