use crm_model::{Customer, CustomerField, UpdateError};

use super::{FieldHandler, UpdateContext};
use crate::normalize::parse_leading_score;

/// Handler for the numeric `score` field.
///
/// Parsing never fails: input that does not start with a digit becomes 0,
/// and anything after the leading digit run is ignored.
pub struct ScoreHandler;

impl FieldHandler for ScoreHandler {
    fn field_name(&self) -> &'static str {
        CustomerField::Score.as_str()
    }

    fn apply(
        &self,
        customer: &mut Customer,
        raw_value: &str,
        _ctx: &UpdateContext<'_>,
    ) -> Result<(), UpdateError> {
        customer.score = parse_leading_score(raw_value);
        Ok(())
    }
}
