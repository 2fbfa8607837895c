//! The field update dispatcher.

use tracing::{debug, warn};

use crm_model::{Customer, UpdateError, UpdateOutcome};
use crm_store::CustomerStore;

use crate::handlers::{self, UpdateContext};
use crate::validator::EmailValidator;

/// Updates exactly one named field on a customer record.
///
/// Each call looks up the field's handler, stages the normalized value on a
/// working copy, persists the copy through the store, and only then
/// overwrites the caller's record. Failures come back as data in the
/// outcome, and no failure path leaves a partial mutation behind.
pub struct FieldUpdateDispatcher<S, V> {
    store: S,
    validator: V,
}

impl<S, V> FieldUpdateDispatcher<S, V>
where
    S: CustomerStore,
    V: EmailValidator,
{
    pub fn new(store: S, validator: V) -> Self {
        Self { store, validator }
    }

    /// Access the underlying store, e.g. to read back persisted records.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply `raw_value` to the named field on `customer`.
    ///
    /// Returns the empty outcome on success. On failure the outcome carries
    /// the error message and the record is unchanged, both in memory and in
    /// the store.
    pub fn update(
        &self,
        customer: &mut Customer,
        field_name: &str,
        raw_value: &str,
    ) -> UpdateOutcome {
        match self.try_update(customer, field_name, raw_value) {
            Ok(()) => UpdateOutcome::ok(),
            Err(err) => {
                warn!(field = field_name, %err, "field update rejected");
                UpdateOutcome::from(err)
            }
        }
    }

    fn try_update(
        &self,
        customer: &mut Customer,
        field_name: &str,
        raw_value: &str,
    ) -> Result<(), UpdateError> {
        let handler =
            handlers::default_registry()
                .get(field_name)
                .ok_or_else(|| UpdateError::UnknownField {
                    field: field_name.to_string(),
                })?;

        let ctx = UpdateContext {
            store: &self.store,
            validator: &self.validator,
        };
        let mut staged = customer.clone();
        handler.apply(&mut staged, raw_value, &ctx)?;
        debug!(field = field_name, customer = %customer.id, "staged field update");

        self.store.save(&staged)?;
        *customer = staged;
        Ok(())
    }
}
