//! Email format validation.

use std::sync::LazyLock;

use regex::Regex;

/// Pragmatic email shape: something before one `@`, a dot somewhere in the
/// domain, no whitespace anywhere.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// Capability interface for email format validation.
///
/// Injected into the dispatcher rather than resolved by name, so tests can
/// substitute a stub with a fixed answer.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}

/// Regex-backed validator shipped as the default implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailValidator;

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_addresses() {
        let validator = RegexEmailValidator;
        assert!(validator.is_valid("test@gmail.com"));
        assert!(validator.is_valid("first.last+tag@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        let validator = RegexEmailValidator;
        assert!(!validator.is_valid("something"));
        assert!(!validator.is_valid("two@@example.com"));
        assert!(!validator.is_valid("no spaces@example.com"));
        assert!(!validator.is_valid("missing@dot"));
        assert!(!validator.is_valid(""));
    }
}
