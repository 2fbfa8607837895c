//! Field handler trait and registry.
//!
//! Every updatable customer field has exactly one handler. Handlers are
//! registered in the [`HandlerRegistry`], which the dispatcher consults by
//! request field name; a name with no handler is rejected as unknown.

pub mod email;
pub mod score;
pub mod text;

use std::collections::HashMap;
use std::sync::OnceLock;

use crm_model::{Customer, CustomerField, UpdateError};
use crm_store::CustomerStore;

use crate::validator::EmailValidator;

pub use email::EmailHandler;
pub use score::ScoreHandler;
pub use text::TextFieldHandler;

/// Collaborators available to a handler while staging an update.
pub struct UpdateContext<'a> {
    pub store: &'a dyn CustomerStore,
    pub validator: &'a dyn EmailValidator,
}

/// Per-field update logic.
///
/// A handler normalizes the raw value, validates it, and stages the new
/// value on the record. Persistence happens in the dispatcher after the
/// handler returns `Ok`; a handler that returns `Err` must leave the record
/// it was given semantically unchanged.
pub trait FieldHandler: Send + Sync {
    /// The request field name this handler owns (e.g. "email", "score").
    fn field_name(&self) -> &'static str;

    /// Normalize and validate `raw_value`, then stage it on `customer`.
    fn apply(
        &self,
        customer: &mut Customer,
        raw_value: &str,
        ctx: &UpdateContext<'_>,
    ) -> Result<(), UpdateError>;
}

/// Registry of field handlers indexed by request field name.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Box<dyn FieldHandler>>,
}

impl HandlerRegistry {
    /// Registers a handler under its own field name, replacing any previous
    /// handler for that field.
    pub fn register(&mut self, handler: Box<dyn FieldHandler>) {
        self.handlers.insert(handler.field_name(), handler);
    }

    /// Gets the handler for a field name. Lookup is exact: unknown names are
    /// the caller's error, not a fallback.
    pub fn get(&self, field_name: &str) -> Option<&dyn FieldHandler> {
        self.handlers.get(field_name).map(|handler| handler.as_ref())
    }

    /// Returns the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns an iterator over all registered field names.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

/// Cached registry with all customer field handlers.
static DEFAULT_REGISTRY: OnceLock<HandlerRegistry> = OnceLock::new();

/// Returns the registry covering every updatable customer field.
///
/// The registry is cached on first access.
pub fn default_registry() -> &'static HandlerRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

fn build_default_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::default();
    registry.register(Box::new(EmailHandler));
    registry.register(Box::new(TextFieldHandler::new(
        CustomerField::FirstName,
        |customer, value| customer.first_name = value,
    )));
    registry.register(Box::new(TextFieldHandler::new(
        CustomerField::LastName,
        |customer, value| customer.last_name = value,
    )));
    registry.register(Box::new(TextFieldHandler::new(
        CustomerField::Phone,
        |customer, value| customer.phone = value,
    )));
    registry.register(Box::new(TextFieldHandler::new(
        CustomerField::Title,
        |customer, value| customer.title = value,
    )));
    registry.register(Box::new(TextFieldHandler::new(
        CustomerField::Role,
        |customer, value| customer.role = value,
    )));
    registry.register(Box::new(ScoreHandler));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_covers_every_field() {
        let registry = default_registry();
        assert_eq!(registry.len(), CustomerField::ALL.len());

        for field in CustomerField::ALL {
            let handler = registry
                .get(field.as_str())
                .unwrap_or_else(|| panic!("handler registered for {field}"));
            assert_eq!(handler.field_name(), field.as_str());
        }
    }

    #[test]
    fn unknown_field_has_no_handler() {
        assert!(default_registry().get("some_other_field").is_none());
    }

    #[test]
    fn lookup_is_exact() {
        let registry = default_registry();
        assert!(registry.get("Email").is_none());
        assert!(registry.get(" email").is_none());
    }

    #[test]
    fn field_names_iterator() {
        let names: Vec<_> = default_registry().field_names().collect();
        assert!(names.contains(&"email"));
        assert!(names.contains(&"score"));
    }
}
