//! The working copy of an address being entered.

use serde::{Deserialize, Serialize};

use super::field::AddressField;

/// Mutable form state for an address that has not been registered yet.
///
/// All fields are free text and are kept verbatim; there is no trimming or
/// formatting. A draft has no identity and is reset to empty after a
/// successful registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDraft {
    pub name: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl AddressDraft {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful for tests and seeding.
    #[must_use]
    pub fn with(mut self, field: AddressField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Read a single field.
    #[must_use]
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Name => &self.name,
            AddressField::Street => &self.street,
            AddressField::Number => &self.number,
            AddressField::Neighborhood => &self.neighborhood,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::PostalCode => &self.postal_code,
        }
    }

    /// Replace a single field, leaving the others untouched.
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::Name => &mut self.name,
            AddressField::Street => &mut self.street,
            AddressField::Number => &mut self.number,
            AddressField::Neighborhood => &mut self.neighborhood,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::PostalCode => &mut self.postal_code,
        };
        *slot = value.into();
    }

    /// First field (in form order) that is the empty string.
    ///
    /// Whitespace counts as content: `" "` is not empty.
    #[must_use]
    pub fn first_missing(&self) -> Option<AddressField> {
        AddressField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    /// Whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        AddressField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
