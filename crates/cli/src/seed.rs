//! Seed the registry from a YAML file.
//!
//! Each entry goes through the same draft-and-register path a user would take,
//! so incomplete or duplicate entries are rejected with the usual messages
//! instead of aborting the whole file.
//!
//! ```yaml
//! addresses:
//!   - name: Ana
//!     street: Main St
//!     number: "10"
//!     neighborhood: Centro
//!     city: Springfield
//!     state: SP
//!     postalCode: 00000-000
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use address_registry::{
    AddressDraft, AddressField, AddressId, AddressRegistry, Clock, RegistrationError,
};

/// Errors that can occur while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid seed YAML.
    #[error("Invalid seed file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Seed file layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub addresses: Vec<AddressDraft>,
}

impl SeedFile {
    /// Parse seed YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not match the seed layout.
    pub fn parse(content: &str) -> Result<Self, SeedError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a seed file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }
}

/// What happened to one seed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Registered(AddressId),
    Rejected(RegistrationError),
}

/// Result of a seeding run, one outcome per entry in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    #[must_use]
    pub fn registered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SeedOutcome::Registered(_)))
            .count()
    }

    #[must_use]
    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.registered()
    }
}

/// Register every entry of `file`, in order.
pub fn apply<C: Clock>(registry: &mut AddressRegistry<C>, file: SeedFile) -> SeedReport {
    let mut report = SeedReport::default();

    for (index, draft) in file.addresses.into_iter().enumerate() {
        for field in AddressField::ALL {
            registry.update_draft_field(field, draft.get(field));
        }

        let outcome = match registry.register() {
            Ok(id) => SeedOutcome::Registered(id),
            Err(error) => {
                warn!(entry = index + 1, %error, "Seed entry rejected");
                SeedOutcome::Rejected(error)
            }
        };
        report.outcomes.push(outcome);
    }

    info!(
        registered = report.registered(),
        rejected = report.rejected(),
        "Seeding complete"
    );
    report
}
