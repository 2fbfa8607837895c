//! Customer record persistence.
//!
//! The [`CustomerStore`] trait is the seam consumed by the field update
//! dispatcher: fetch one record, look up an email collision, persist one
//! record. [`InMemoryCustomerStore`] is the bundled implementation; a
//! database-backed store substitutes behind the same trait.

pub mod error;
pub mod memory;

pub use error::{Result, StoreError};
pub use memory::InMemoryCustomerStore;

use crm_model::{Customer, CustomerId};

/// Read/update access to customer records.
///
/// `save` is the authoritative uniqueness guard: implementations must reject
/// a write whose normalized email already belongs to another record, even
/// when the caller pre-checked with [`CustomerStore::find_other_by_email`].
pub trait CustomerStore: Send + Sync {
    /// Fetch a record by identity.
    fn find(&self, id: CustomerId) -> Result<Option<Customer>>;

    /// Return a record other than `excluding` that owns `email`.
    /// Email comparison is case- and whitespace-insensitive.
    fn find_other_by_email(
        &self,
        email: &str,
        excluding: CustomerId,
    ) -> Result<Option<Customer>>;

    /// Persist the record in one atomic write. Stamps `updated_at`;
    /// `created_at` stays as recorded at insertion.
    fn save(&self, customer: &Customer) -> Result<()>;
}
