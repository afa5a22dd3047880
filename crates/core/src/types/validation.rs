//! Registration failures and the transient notice shown to the user.

use serde::{Deserialize, Serialize};

use super::field::AddressField;
use super::id::AddressId;

/// Why a registration attempt was rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// At least one draft field is empty. `field` is the first one in form
    /// order.
    #[error("All fields are required")]
    IncompleteInput {
        /// First empty field.
        field: AddressField,
    },
    /// Street (case-insensitive), number and postal code match an existing
    /// record.
    #[error("Address already registered")]
    DuplicateAddress {
        /// The record that already holds this address.
        existing: AddressId,
    },
}

/// The most recent validation failure, as surfaced to the presentation layer.
///
/// Inactive with an empty description until a registration fails; overwritten
/// by every failed attempt and cleared by the next successful one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationNotice {
    pub active: bool,
    pub description: String,
}

impl ValidationNotice {
    /// Whether the notice should be rendered.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The message, only while active.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.active.then_some(self.description.as_str())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<&RegistrationError> for ValidationNotice {
    fn from(err: &RegistrationError) -> Self {
        Self {
            active: true,
            description: err.to_string(),
        }
    }
}
