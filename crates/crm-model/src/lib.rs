pub mod customer;
pub mod field;
pub mod outcome;

pub use customer::{Customer, CustomerId};
pub use field::CustomerField;
pub use outcome::{UpdateError, UpdateOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_defaults() {
        let customer = Customer::new(CustomerId(1), "a@b.io");
        assert_eq!(customer.email, "a@b.io");
        assert!(!customer.verified);
        assert_eq!(customer.score, 0);
        assert_eq!(customer.created_at, customer.updated_at);
    }

    #[test]
    fn outcome_serializes_to_empty_object_on_success() {
        let json = serde_json::to_string(&UpdateOutcome::ok()).expect("serialize outcome");
        assert_eq!(json, "{}");
    }
}
