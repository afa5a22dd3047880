//! Integration tests for the address registry.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p address-registry-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `registry_properties` - Registration, deactivation and delete-flow
//!   guarantees exercised through the public registry API
//! - `cli_session` - Scripted sessions and seeding through the CLI library
//!
//! Shared fixtures live here.

use address_registry::{AddressDraft, AddressField, AddressRegistry, Clock, FixedClock};
use chrono::{DateTime, TimeZone, Utc};

/// 2026-10-16T12:00:00Z, the instant [`fixed_clock`] reports.
///
/// # Panics
///
/// Never in practice: the date is a fixed, valid UTC instant.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

/// A clock pinned to [`fixed_instant`].
#[must_use]
pub fn fixed_clock() -> FixedClock {
    FixedClock(fixed_instant())
}

/// The reference address: Ana, Main St 10, Centro, Springfield/SP, 00000-000.
#[must_use]
pub fn ana() -> AddressDraft {
    AddressDraft::new()
        .with(AddressField::Name, "Ana")
        .with(AddressField::Street, "Main St")
        .with(AddressField::Number, "10")
        .with(AddressField::Neighborhood, "Centro")
        .with(AddressField::City, "Springfield")
        .with(AddressField::State, "SP")
        .with(AddressField::PostalCode, "00000-000")
}

/// Type every field of `draft` into the registry's form.
pub fn type_draft<C: Clock>(registry: &mut AddressRegistry<C>, draft: &AddressDraft) {
    for field in AddressField::ALL {
        registry.update_draft_field(field, draft.get(field));
    }
}
