//! Core types for the address registry.
//!
//! This module provides type-safe wrappers for the address domain.

pub mod address;
pub mod deletion;
pub mod draft;
pub mod field;
pub mod id;
pub mod validation;

pub use address::{Address, DuplicateKey};
pub use deletion::PendingDeletion;
pub use draft::AddressDraft;
pub use field::{AddressField, AddressFieldError};
pub use id::{AddressId, AddressIdError};
pub use validation::{RegistrationError, ValidationNotice};
