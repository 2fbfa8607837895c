//! In-memory customer store.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use tracing::debug;

use crm_model::{Customer, CustomerId};

use crate::CustomerStore;
use crate::error::{Result, StoreError};

/// Thread-safe in-memory store keyed by customer id, with a normalized-email
/// index enforcing the uniqueness constraint.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    customers: HashMap<CustomerId, Customer>,
    /// Normalized email -> owning record.
    email_index: HashMap<String, CustomerId>,
}

/// Index key for an email: trimmed and lowercased, matching the record-level
/// uniqueness invariant.
fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an externally-created record. Stamps both timestamps and claims
    /// the record's email in the index.
    pub fn insert(&self, mut customer: Customer) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        if inner.customers.contains_key(&customer.id) {
            return Err(StoreError::DuplicateId { id: customer.id });
        }
        let key = email_key(&customer.email);
        if let Some(owner) = inner.email_index.get(&key) {
            if *owner != customer.id {
                return Err(StoreError::EmailTaken {
                    email: customer.email.clone(),
                });
            }
        }
        let now = Utc::now();
        customer.created_at = now;
        customer.updated_at = now;
        debug!(customer = %customer.id, "inserted customer");
        inner.email_index.insert(key, customer.id);
        inner.customers.insert(customer.id, customer);
        Ok(())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.customers.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn find(&self, id: CustomerId) -> Result<Option<Customer>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.customers.get(&id).cloned())
    }

    fn find_other_by_email(
        &self,
        email: &str,
        excluding: CustomerId,
    ) -> Result<Option<Customer>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        let key = email_key(email);
        Ok(inner
            .email_index
            .get(&key)
            .filter(|owner| **owner != excluding)
            .and_then(|owner| inner.customers.get(owner))
            .cloned())
    }

    fn save(&self, customer: &Customer) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let Some(existing) = inner.customers.get(&customer.id) else {
            return Err(StoreError::NotFound { id: customer.id });
        };
        let created_at = existing.created_at;
        let previous_key = email_key(&existing.email);

        let key = email_key(&customer.email);
        if let Some(owner) = inner.email_index.get(&key) {
            if *owner != customer.id {
                return Err(StoreError::EmailTaken {
                    email: customer.email.clone(),
                });
            }
        }

        if previous_key != key {
            inner.email_index.remove(&previous_key);
        }
        inner.email_index.insert(key, customer.id);

        let mut stored = customer.clone();
        stored.created_at = created_at;
        stored.updated_at = Utc::now();
        debug!(customer = %customer.id, "persisted customer");
        inner.customers.insert(customer.id, stored);
        Ok(())
    }
}
