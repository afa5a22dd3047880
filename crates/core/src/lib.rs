//! Address Registry Core - Shared types library.
//!
//! This crate provides the domain types used across all address registry
//! components:
//! - `registry` - The stateful `AddressRegistry` that owns the address list
//! - `cli` - A command-line session that drives the registry
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no clocks, no
//! global state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Address ids, drafts, records, validation errors, and the
//!   pending-deletion selection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
