//! Customer field update dispatch.
//!
//! This crate provides the core update operation for customer records:
//!
//! - **Dispatch**: a fixed table mapping request field names to handlers
//! - **Normalization**: trimming, case-folding, leading-digit parsing
//! - **Validation**: email format (injected capability) and email
//!   uniqueness (record store)
//! - **Persistence**: one atomic store write per successful update
//!
//! # Example
//!
//! ```
//! use crm_core::{FieldUpdateDispatcher, RegexEmailValidator};
//! use crm_model::{Customer, CustomerId};
//! use crm_store::{CustomerStore, InMemoryCustomerStore};
//!
//! let store = InMemoryCustomerStore::new();
//! store
//!     .insert(Customer::new(CustomerId(1), "old@example.com"))
//!     .unwrap();
//! let mut customer = store.find(CustomerId(1)).unwrap().unwrap();
//!
//! let dispatcher = FieldUpdateDispatcher::new(store, RegexEmailValidator);
//! let outcome = dispatcher.update(&mut customer, "email", "  New@Example.com ");
//! assert!(outcome.is_ok());
//! assert_eq!(customer.email, "new@example.com");
//! assert!(!customer.verified);
//! ```

pub mod dispatcher;
pub mod handlers;
pub mod normalize;
pub mod validator;

pub use dispatcher::FieldUpdateDispatcher;
pub use handlers::{FieldHandler, HandlerRegistry, UpdateContext, default_registry};
pub use validator::{EMAIL_REGEX, EmailValidator, RegexEmailValidator};
