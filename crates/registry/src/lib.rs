//! Address Registry - the state owner behind the address form.
//!
//! [`AddressRegistry`] holds the list of registered addresses, the draft the
//! user is typing, the most recent validation notice and the delete
//! confirmation selection. A presentation layer drives it through commands
//! and renders it from read projections (or a [`RegistrySnapshot`]),
//! optionally reacting to [`RegistryEvent`]s.
//!
//! ```
//! use address_registry::{AddressField, AddressRegistry};
//!
//! let mut registry = AddressRegistry::new();
//! for (field, value) in [
//!     (AddressField::Name, "Ana"),
//!     (AddressField::Street, "Main St"),
//!     (AddressField::Number, "10"),
//!     (AddressField::Neighborhood, "Centro"),
//!     (AddressField::City, "Springfield"),
//!     (AddressField::State, "SP"),
//!     (AddressField::PostalCode, "00000-000"),
//! ] {
//!     registry.update_draft_field(field, value);
//! }
//!
//! let id = registry.register().unwrap();
//! registry.request_deletion(id);
//! assert!(registry.confirm_deletion().is_some());
//! assert!(registry.is_empty());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clock;
pub mod events;
pub mod registry;
pub mod snapshot;

pub use address_registry_core::*;
pub use clock::{Clock, FixedClock, SystemClock};
pub use events::RegistryEvent;
pub use registry::AddressRegistry;
pub use snapshot::RegistrySnapshot;
