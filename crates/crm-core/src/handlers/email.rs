use tracing::debug;

use crm_model::{Customer, CustomerField, UpdateError};

use super::{FieldHandler, UpdateContext};
use crate::normalize::normalize_email;

/// Handler for the `email` field.
///
/// Normalizes (trim + lowercase), requires a non-blank address, checks the
/// format through the injected validator, checks uniqueness against the
/// store, then stages the address and clears the verification flag. The
/// uniqueness pre-check exists for the error message; the store's constraint
/// remains the authoritative guard at save time.
pub struct EmailHandler;

impl FieldHandler for EmailHandler {
    fn field_name(&self) -> &'static str {
        CustomerField::Email.as_str()
    }

    fn apply(
        &self,
        customer: &mut Customer,
        raw_value: &str,
        ctx: &UpdateContext<'_>,
    ) -> Result<(), UpdateError> {
        let normalized = normalize_email(raw_value);
        if normalized.is_empty() {
            return Err(UpdateError::EmailBlank);
        }
        if !ctx.validator.is_valid(&normalized) {
            // the message carries the raw input, not the normalized form
            return Err(UpdateError::EmailInvalid {
                value: raw_value.to_string(),
            });
        }
        if ctx
            .store
            .find_other_by_email(&normalized, customer.id)?
            .is_some()
        {
            return Err(UpdateError::EmailDuplicate);
        }

        debug!(customer = %customer.id, "staging email change, verification reset");
        customer.email = normalized;
        customer.verified = false;
        Ok(())
    }
}
