//! Names of the editable draft fields.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name an [`AddressField`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown address field: {0}")]
pub struct AddressFieldError(pub String);

/// One of the seven text fields a user fills in before registering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    Name,
    Street,
    Number,
    Neighborhood,
    City,
    State,
    PostalCode,
}

impl AddressField {
    /// Every field, in form order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Street,
        Self::Number,
        Self::Neighborhood,
        Self::City,
        Self::State,
        Self::PostalCode,
    ];

    /// The camelCase name used for display and parsing.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Street => "street",
            Self::Number => "number",
            Self::Neighborhood => "neighborhood",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postalCode",
        }
    }
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for AddressField {
    type Err = AddressFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "street" => Ok(Self::Street),
            "number" => Ok(Self::Number),
            "neighborhood" => Ok(Self::Neighborhood),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "postalCode" | "postal_code" => Ok(Self::PostalCode),
            _ => Err(AddressFieldError(s.to_owned())),
        }
    }
}
