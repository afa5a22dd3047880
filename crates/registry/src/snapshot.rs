//! Read-only, serializable view of the registry for renderers.

use serde::Serialize;

use address_registry_core::{Address, AddressDraft, PendingDeletion, ValidationNotice};

/// Everything a renderer needs, borrowed from the registry.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot<'a> {
    pub draft: &'a AddressDraft,
    pub addresses: &'a [Address],
    pub error: &'a ValidationNotice,
    pub pending_deletion: PendingDeletion,
}
