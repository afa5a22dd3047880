//! The address registry state owner.
//!
//! All commands run synchronously to completion on `&mut self`; there is a
//! single owner (the presentation session) and no shared state, so nothing
//! here locks.

use std::fmt;

use tracing::{debug, info, instrument, warn};

use address_registry_core::{
    Address, AddressDraft, AddressField, AddressId, DuplicateKey, PendingDeletion,
    RegistrationError, ValidationNotice,
};

use crate::clock::{Clock, SystemClock};
use crate::events::{Observer, RegistryEvent};
use crate::snapshot::RegistrySnapshot;

/// Owns the address list, the working draft, the validation notice and the
/// delete confirmation state.
///
/// Addresses are kept in insertion order. Records are only ever appended by
/// [`register`](Self::register), flagged by [`deactivate`](Self::deactivate)
/// and removed by [`confirm_deletion`](Self::confirm_deletion).
pub struct AddressRegistry<C = SystemClock> {
    clock: C,
    draft: AddressDraft,
    addresses: Vec<Address>,
    error: ValidationNotice,
    pending: PendingDeletion,
    observers: Vec<Observer>,
}

impl AddressRegistry {
    /// Create an empty registry stamping records with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for AddressRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for AddressRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressRegistry")
            .field("draft", &self.draft)
            .field("addresses", &self.addresses)
            .field("error", &self.error)
            .field("pending", &self.pending)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<C: Clock> AddressRegistry<C> {
    /// Create an empty registry with a custom time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            draft: AddressDraft::default(),
            addresses: Vec::new(),
            error: ValidationNotice::default(),
            pending: PendingDeletion::default(),
            observers: Vec::new(),
        }
    }

    /// Register a callback for every state change.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&RegistryEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Replace one draft field. No validation happens here.
    pub fn update_draft_field(&mut self, field: AddressField, value: impl Into<String>) {
        self.draft.set(field, value);
        debug!(%field, "Draft field updated");
        self.emit(&RegistryEvent::DraftUpdated { field });
    }

    /// Turn the current draft into a registered address.
    ///
    /// Checks run in order and the first failure wins: every field must be
    /// non-empty (no trimming), then the (street, number, postal code) triple
    /// must not match any existing record, active or not. On success the
    /// record is appended, the draft reset and the notice cleared.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::IncompleteInput`] or
    /// [`RegistrationError::DuplicateAddress`]. Either way the same message is
    /// stored in the notice slot and the draft and address list are left
    /// untouched.
    #[instrument(skip_all)]
    pub fn register(&mut self) -> Result<AddressId, RegistrationError> {
        if let Err(error) = self.check_draft() {
            warn!(%error, kind = ?error, "Registration rejected");
            self.error = ValidationNotice::from(&error);
            self.emit(&RegistryEvent::RegistrationRejected {
                error: error.clone(),
            });
            return Err(error);
        }

        let draft = std::mem::take(&mut self.draft);
        let address = Address::from_draft(AddressId::generate(), draft, self.clock.now());
        let id = address.id();
        self.addresses.push(address);
        self.error.clear();

        info!(%id, total = self.addresses.len(), "Address registered");
        self.emit(&RegistryEvent::Registered { id });
        Ok(id)
    }

    /// Mark a record inactive.
    ///
    /// Unknown ids and already-inactive records are silently ignored. Returns
    /// whether a record with this id exists.
    #[instrument(skip_all, fields(%id))]
    pub fn deactivate(&mut self, id: AddressId) -> bool {
        let Some(address) = self.addresses.iter_mut().find(|a| a.id() == id) else {
            debug!("Deactivate ignored: unknown id");
            return false;
        };

        if address.deactivate() {
            info!("Address deactivated");
            self.emit(&RegistryEvent::Deactivated { id });
        }
        true
    }

    /// Select `id` for deletion and show the confirmation.
    ///
    /// Overwrites any earlier selection. The id is not checked here.
    #[instrument(skip_all, fields(%id))]
    pub fn request_deletion(&mut self, id: AddressId) {
        self.pending.request(id);
        debug!("Deletion requested");
        self.emit(&RegistryEvent::DeletionRequested { id });
    }

    /// Hide the confirmation without deleting anything.
    pub fn cancel_deletion(&mut self) {
        self.pending.dismiss();
        debug!("Deletion cancelled");
        self.emit(&RegistryEvent::DeletionCancelled);
    }

    /// Remove the selected record for good and hide the confirmation.
    ///
    /// Returns the removed record, or `None` if nothing matched the
    /// selection.
    #[instrument(skip_all, fields(target = ?self.pending.target))]
    pub fn confirm_deletion(&mut self) -> Option<Address> {
        self.pending.dismiss();

        let removed = self.pending.target.and_then(|id| {
            self.addresses
                .iter()
                .position(|a| a.id() == id)
                .map(|index| self.addresses.remove(index))
        });

        match &removed {
            Some(address) => info!(id = %address.id(), "Address deleted"),
            None => debug!("Deletion confirmed but target not found"),
        }
        self.emit(&RegistryEvent::DeletionConfirmed {
            removed: removed.as_ref().map(Address::id),
        });
        removed
    }

    // =========================================================================
    // Read projections
    // =========================================================================

    /// The draft currently being edited.
    #[must_use]
    pub const fn draft(&self) -> &AddressDraft {
        &self.draft
    }

    /// All records in insertion order, active or not.
    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Records that have not been deactivated.
    pub fn active_addresses(&self) -> impl Iterator<Item = &Address> {
        self.addresses.iter().filter(|a| a.is_active())
    }

    #[must_use]
    pub fn get(&self, id: AddressId) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// The most recent validation notice.
    #[must_use]
    pub const fn error(&self) -> &ValidationNotice {
        &self.error
    }

    /// The delete selection and whether its confirmation is showing.
    #[must_use]
    pub const fn pending_deletion(&self) -> PendingDeletion {
        self.pending
    }

    #[must_use]
    pub const fn is_confirm_visible(&self) -> bool {
        self.pending.confirm_visible
    }

    /// Borrow the whole state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot<'_> {
        RegistrySnapshot {
            draft: &self.draft,
            addresses: &self.addresses,
            error: &self.error,
            pending_deletion: self.pending,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn check_draft(&self) -> Result<(), RegistrationError> {
        if let Some(field) = self.draft.first_missing() {
            return Err(RegistrationError::IncompleteInput { field });
        }

        let key = DuplicateKey::of_draft(&self.draft);
        if let Some(existing) = self.addresses.iter().find(|a| a.duplicate_key() == key) {
            return Err(RegistrationError::DuplicateAddress {
                existing: existing.id(),
            });
        }

        Ok(())
    }

    fn emit(&mut self, event: &RegistryEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}
