//! Registered address records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::draft::AddressDraft;
use super::id::AddressId;

/// The uniqueness key of an address: street (lower-cased), number and postal
/// code.
///
/// Name, neighborhood, city and state do not participate. Only the street is
/// compared case-insensitively; number and postal code must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateKey {
    street: String,
    number: String,
    postal_code: String,
}

impl DuplicateKey {
    /// Build a key from raw field values.
    #[must_use]
    pub fn new(street: &str, number: &str, postal_code: &str) -> Self {
        Self {
            street: street.to_lowercase(),
            number: number.to_owned(),
            postal_code: postal_code.to_owned(),
        }
    }

    /// Key for a not-yet-registered draft.
    #[must_use]
    pub fn of_draft(draft: &AddressDraft) -> Self {
        Self::new(&draft.street, &draft.number, &draft.postal_code)
    }
}

/// A registered address.
///
/// Created from a complete [`AddressDraft`]; the seven text fields are copied
/// verbatim. `created_at` and `id` never change after creation and the only
/// permitted mutation is [`Address::deactivate`]. Records serialize for
/// output but cannot be deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    id: AddressId,
    name: String,
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    postal_code: String,
    created_at: DateTime<Utc>,
    active: bool,
    registered: bool,
}

impl Address {
    /// Finalize a draft into a new, active, registered record.
    #[must_use]
    pub fn from_draft(id: AddressId, draft: AddressDraft, created_at: DateTime<Utc>) -> Self {
        let AddressDraft {
            name,
            street,
            number,
            neighborhood,
            city,
            state,
            postal_code,
        } = draft;

        Self {
            id,
            name,
            street,
            number,
            neighborhood,
            city,
            state,
            postal_code,
            created_at,
            active: true,
            registered: true,
        }
    }

    #[must_use]
    pub const fn id(&self) -> AddressId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[must_use]
    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// When the record was registered.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Inactive records are still listed (and still count for duplicate
    /// detection) but are rendered as struck through.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Always `true` for records produced by [`Address::from_draft`].
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.registered
    }

    #[must_use]
    pub fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey::new(&self.street, &self.number, &self.postal_code)
    }

    /// Mark the record inactive. Returns `true` if it was active before.
    pub fn deactivate(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn draft() -> AddressDraft {
        AddressDraft {
            name: "Ana".into(),
            street: "Main St".into(),
            number: "10".into(),
            neighborhood: "Centro".into(),
            city: "Springfield".into(),
            state: "SP".into(),
            postal_code: "00000-000".into(),
        }
    }

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_from_draft_copies_fields_verbatim() {
        let mut input = draft();
        input.street = "  MAIN st ".into();
        let address = Address::from_draft(AddressId::generate(), input, created_at());

        assert_eq!(address.street(), "  MAIN st ");
        assert_eq!(address.name(), "Ana");
        assert_eq!(address.postal_code(), "00000-000");
        assert!(address.is_active());
        assert!(address.is_registered());
        assert_eq!(address.created_at(), created_at());
    }

    #[test]
    fn test_duplicate_key_ignores_street_case_only() {
        let address = Address::from_draft(AddressId::generate(), draft(), created_at());

        assert_eq!(
            address.duplicate_key(),
            DuplicateKey::new("MAIN ST", "10", "00000-000")
        );
        assert_ne!(
            address.duplicate_key(),
            DuplicateKey::new("Main St", "10A", "00000-000")
        );
        assert_ne!(
            address.duplicate_key(),
            DuplicateKey::new("Main St", "10", "00000000")
        );
    }

    #[test]
    fn test_duplicate_key_ignores_other_fields() {
        let mut other = draft();
        other.name = "Bia".into();
        other.city = "Elsewhere".into();
        other.state = "RJ".into();
        other.neighborhood = "Norte".into();
        assert_eq!(DuplicateKey::of_draft(&other), DuplicateKey::of_draft(&draft()));
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut address = Address::from_draft(AddressId::generate(), draft(), created_at());
        assert!(address.deactivate());
        assert!(!address.deactivate());
        assert!(!address.is_active());
        assert!(address.is_registered());
    }

    #[test]
    fn test_serializes_camel_case_with_rfc3339_timestamp() {
        let address = Address::from_draft(AddressId::generate(), draft(), created_at());
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["postalCode"], "00000-000");
        assert_eq!(json["createdAt"], "2026-01-02T03:04:05Z");
        assert_eq!(json["active"], true);
        assert_eq!(json["registered"], true);
    }

    #[test]
    fn test_deactivated_record_serializes_as_registered() {
        let mut address = Address::from_draft(AddressId::generate(), draft(), created_at());
        address.deactivate();
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["active"], false);
        assert_eq!(json["registered"], true);
        assert_eq!(json["id"], address.id().to_string());
    }
}
