//! Change notifications for observers of the registry.

use address_registry_core::{AddressField, AddressId, RegistrationError};

/// Emitted after a command changes registry state.
///
/// Commands that turn out to be no-ops (for example deactivating an unknown
/// or already inactive id) emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A draft field was replaced.
    DraftUpdated { field: AddressField },
    /// A new record was appended and the draft reset.
    Registered { id: AddressId },
    /// `register` failed; the notice now carries the error message.
    RegistrationRejected { error: RegistrationError },
    /// A record went from active to inactive.
    Deactivated { id: AddressId },
    /// The delete confirmation is showing for `id`.
    DeletionRequested { id: AddressId },
    /// The delete confirmation was dismissed without deleting.
    DeletionCancelled,
    /// The delete confirmation was accepted. `removed` is `None` when the
    /// target no longer existed.
    DeletionConfirmed { removed: Option<AddressId> },
}

/// Callback invoked for every [`RegistryEvent`].
pub type Observer = Box<dyn FnMut(&RegistryEvent)>;
