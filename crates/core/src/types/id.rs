//! Opaque address identifiers.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur when parsing an [`AddressId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressIdError {
    /// The input string is empty.
    #[error("address id cannot be empty")]
    Empty,
    /// The input is not a valid UUID.
    #[error("invalid address id: {0}")]
    Malformed(String),
}

/// Unique identifier of a registered [`Address`](crate::Address).
///
/// Generated once when the record is created and stable for the record's
/// lifetime. Backed by a random (v4) UUID so collisions are negligible.
///
/// ```
/// use address_registry_core::AddressId;
///
/// let a = AddressId::generate();
/// let b = AddressId::generate();
/// assert_ne!(a, b);
///
/// let parsed: AddressId = a.to_string().parse().unwrap();
/// assert_eq!(parsed, a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(Uuid);

impl AddressId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AddressId {
    type Err = AddressIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AddressIdError::Empty);
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| AddressIdError::Malformed(s.to_owned()))
    }
}

impl From<Uuid> for AddressId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AddressId> for Uuid {
    fn from(id: AddressId) -> Self {
        id.0
    }
}
