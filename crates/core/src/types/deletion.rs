//! Two-step delete selection.

use serde::{Deserialize, Serialize};

use super::id::AddressId;

/// Target of a delete awaiting confirmation.
///
/// Lives between the user asking to delete a record and confirming or
/// cancelling. `target` may be stale once `confirm_visible` is false; it is
/// only meaningful while the confirmation is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDeletion {
    pub target: Option<AddressId>,
    pub confirm_visible: bool,
}

impl PendingDeletion {
    /// Select `id` and show the confirmation, replacing any prior selection.
    pub fn request(&mut self, id: AddressId) {
        self.target = Some(id);
        self.confirm_visible = true;
    }

    /// Hide the confirmation, keeping the (now stale) target.
    pub fn dismiss(&mut self) {
        self.confirm_visible = false;
    }

    /// The target while the confirmation is showing.
    #[must_use]
    pub const fn awaiting(&self) -> Option<AddressId> {
        if self.confirm_visible { self.target } else { None }
    }
}
