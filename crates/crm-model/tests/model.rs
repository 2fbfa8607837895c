//! Tests for crm-model types.

use crm_model::{Customer, CustomerField, CustomerId, UpdateError, UpdateOutcome};

#[test]
fn builder_populates_fields() {
    let customer = Customer::new(CustomerId(7), "jane.doe@example.com")
        .with_first_name("Jane")
        .with_last_name("Doe")
        .with_phone("+9955232314")
        .with_title("Captain")
        .with_role("Mighty")
        .with_score(42)
        .with_verified(true);

    assert_eq!(customer.first_name, "Jane");
    assert_eq!(customer.last_name, "Doe");
    assert_eq!(customer.phone, "+9955232314");
    assert_eq!(customer.title, "Captain");
    assert_eq!(customer.role, "Mighty");
    assert_eq!(customer.score, 42);
    assert!(customer.verified);
}

#[test]
fn field_table_covers_all_request_names() {
    let names: Vec<&str> = CustomerField::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(
        names,
        vec!["email", "first_name", "last_name", "phone", "title", "role", "score"]
    );
}

#[test]
fn outcome_serializes() {
    let ok = serde_json::to_string(&UpdateOutcome::ok()).expect("serialize success");
    assert_eq!(ok, "{}");

    let failed = serde_json::to_string(&UpdateOutcome::from(UpdateError::EmailBlank))
        .expect("serialize failure");
    assert_eq!(
        failed,
        r#"{"error":"You need to specify an email for this customer."}"#
    );

    let round: UpdateOutcome = serde_json::from_str("{}").expect("deserialize success");
    assert!(round.is_ok());
}

#[test]
fn customer_serializes() {
    let customer = Customer::new(CustomerId(3), "test@gmail.com").with_score(53);
    let json = serde_json::to_string(&customer).expect("serialize customer");
    let round: Customer = serde_json::from_str(&json).expect("deserialize customer");
    assert_eq!(round, customer);
}
