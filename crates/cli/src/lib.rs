//! Address Registry CLI library.
//!
//! A minimal line-oriented presentation layer over
//! [`AddressRegistry`](address_registry::AddressRegistry), split out of the
//! binary so the command parser, renderer and seeding logic can be tested.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration (`ADDR_CLI_*`)
//! - [`render`] - Table and JSON rendering of registry state
//! - [`seed`] - Bulk registration from a YAML file
//! - [`session`] - Command parsing and the read-eval-render loop

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod render;
pub mod seed;
pub mod session;

pub use config::{CliConfig, ConfigError, LogFormat};
pub use render::OutputFormat;
pub use seed::{SeedError, SeedOutcome, SeedReport};
pub use session::{CommandError, Session, SessionCommand, Target, View};
