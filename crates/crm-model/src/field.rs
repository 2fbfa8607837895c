use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The customer fields that can be changed through a field update.
///
/// The variants mirror the dispatch keys accepted by the update call;
/// anything else is rejected as an unknown field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerField {
    Email,
    FirstName,
    LastName,
    Phone,
    Title,
    Role,
    Score,
}

impl CustomerField {
    /// Every updatable field, in dispatch-table order.
    pub const ALL: [CustomerField; 7] = [
        CustomerField::Email,
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::Phone,
        CustomerField::Title,
        CustomerField::Role,
        CustomerField::Score,
    ];

    /// Returns the field name as it appears in update requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerField::Email => "email",
            CustomerField::FirstName => "first_name",
            CustomerField::LastName => "last_name",
            CustomerField::Phone => "phone",
            CustomerField::Title => "title",
            CustomerField::Role => "role",
            CustomerField::Score => "score",
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CustomerField {
    type Err = String;

    /// Parse a request field name. Matching is exact: field names arrive
    /// already snake_cased from the request layer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(CustomerField::Email),
            "first_name" => Ok(CustomerField::FirstName),
            "last_name" => Ok(CustomerField::LastName),
            "phone" => Ok(CustomerField::Phone),
            "title" => Ok(CustomerField::Title),
            "role" => Ok(CustomerField::Role),
            "score" => Ok(CustomerField::Score),
            _ => Err(format!("unknown customer field: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_field_name() {
        for field in CustomerField::ALL {
            assert_eq!(field.as_str().parse::<CustomerField>(), Ok(field));
        }
    }

    #[test]
    fn rejects_unknown_and_case_variants() {
        assert!("bogus_field".parse::<CustomerField>().is_err());
        assert!("Email".parse::<CustomerField>().is_err());
        assert!(" email".parse::<CustomerField>().is_err());
    }
}
