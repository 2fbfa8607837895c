use crm_model::{Customer, CustomerField, UpdateError};

use super::{FieldHandler, UpdateContext};

/// Handler shared by the free-text fields (`first_name`, `last_name`,
/// `phone`, `title`, `role`).
///
/// Trims surrounding whitespace and assigns. There is no format validation;
/// input that is empty after trimming is accepted as-is.
pub struct TextFieldHandler {
    field: CustomerField,
    assign: fn(&mut Customer, String),
}

impl TextFieldHandler {
    pub fn new(field: CustomerField, assign: fn(&mut Customer, String)) -> Self {
        Self { field, assign }
    }
}

impl FieldHandler for TextFieldHandler {
    fn field_name(&self) -> &'static str {
        self.field.as_str()
    }

    fn apply(
        &self,
        customer: &mut Customer,
        raw_value: &str,
        _ctx: &UpdateContext<'_>,
    ) -> Result<(), UpdateError> {
        (self.assign)(customer, raw_value.trim().to_string());
        Ok(())
    }
}
