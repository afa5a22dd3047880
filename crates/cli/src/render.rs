//! Rendering registry state for the terminal.
//!
//! `table` output is meant for people; `json` output writes one JSON document
//! per line so scripts can consume it.

use std::io::{self, Write};

use address_registry::{Address, AddressField, RegistrySnapshot};
use serde::Serialize;

/// How registry state is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected table or json)")),
        }
    }
}

/// Render the whole registry: draft, notice, list and confirmation prompt.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn snapshot<W: Write>(
    out: &mut W,
    format: OutputFormat,
    snapshot: &RegistrySnapshot<'_>,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => json_line(out, snapshot),
        OutputFormat::Table => {
            writeln!(out, "Draft:")?;
            for field in AddressField::ALL {
                writeln!(out, "  {:<13} {}", field, snapshot.draft.get(field))?;
            }
            if let Some(message) = snapshot.error.message() {
                writeln!(out, "Error: {message}")?;
            }
            address_table(out, snapshot.addresses)?;
            if let Some(id) = snapshot.pending_deletion.awaiting() {
                writeln!(out, "Delete {id}? (confirm / cancel)")?;
            }
            Ok(())
        }
    }
}

/// Render only the address list.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn addresses<W: Write>(
    out: &mut W,
    format: OutputFormat,
    addresses: &[Address],
) -> io::Result<()> {
    match format {
        OutputFormat::Json => json_line(out, &addresses),
        OutputFormat::Table => address_table(out, addresses),
    }
}

/// Render a one-off message (command errors, help text, seed results).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn message<W: Write>(out: &mut W, format: OutputFormat, kind: &str, text: &str) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Message<'a> {
                kind: &'a str,
                message: &'a str,
            }
            json_line(out, &Message {
                kind,
                message: text,
            })
        }
        OutputFormat::Table => writeln!(out, "{text}"),
    }
}

fn address_table<W: Write>(out: &mut W, addresses: &[Address]) -> io::Result<()> {
    writeln!(out, "Addresses ({}):", addresses.len())?;
    for (position, address) in addresses.iter().enumerate() {
        let status = if address.is_active() { "active" } else { "inactive" };
        writeln!(
            out,
            "  #{} [{status}] {}  {}",
            position + 1,
            address.id(),
            address.name()
        )?;
        writeln!(
            out,
            "      {}, {} - {}",
            address.street(),
            address.number(),
            address.neighborhood()
        )?;
        writeln!(
            out,
            "      {}/{} - Postal code: {}  (created {})",
            address.city(),
            address.state(),
            address.postal_code(),
            address.created_at().to_rfc3339()
        )?;
    }
    Ok(())
}

fn json_line<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use address_registry::{AddressRegistry, FixedClock};

    use super::*;

    fn registry() -> AddressRegistry<FixedClock> {
        let clock = FixedClock("2026-10-16T12:00:00Z".parse().unwrap());
        let mut registry = AddressRegistry::with_clock(clock);
        for (field, value) in [
            (AddressField::Name, "Ana"),
            (AddressField::Street, "Main St"),
            (AddressField::Number, "10"),
            (AddressField::Neighborhood, "Centro"),
            (AddressField::City, "Springfield"),
            (AddressField::State, "SP"),
            (AddressField::PostalCode, "00000-000"),
        ] {
            registry.update_draft_field(field, value);
        }
        registry.register().unwrap();
        registry
    }

    fn render(format: OutputFormat, registry: &AddressRegistry<FixedClock>) -> String {
        let mut out = Vec::new();
        snapshot(&mut out, format, &registry.snapshot()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_lists_addresses() {
        let registry = registry();
        let text = render(OutputFormat::Table, &registry);
        assert!(text.contains("Addresses (1):"));
        assert!(text.contains("[active]"));
        assert!(text.contains("Main St, 10 - Centro"));
        assert!(text.contains("Springfield/SP - Postal code: 00000-000"));
        assert!(!text.contains("Error:"));
        assert!(!text.contains("confirm / cancel"));
    }

    #[test]
    fn test_table_shows_error_inactive_and_prompt() {
        let mut registry = registry();
        let id = registry.addresses().first().unwrap().id();
        registry.deactivate(id);
        registry.register().unwrap_err();
        registry.request_deletion(id);

        let text = render(OutputFormat::Table, &registry);
        assert!(text.contains("[inactive]"));
        assert!(text.contains("Error: All fields are required"));
        assert!(text.contains(&format!("Delete {id}? (confirm / cancel)")));
    }

    #[test]
    fn test_json_is_single_line() {
        let registry = registry();
        let text = render(OutputFormat::Json, &registry);
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["addresses"][0]["name"], "Ana");
    }

    #[test]
    fn test_json_message() {
        let mut out = Vec::new();
        message(&mut out, OutputFormat::Json, "error", "unknown command: foo").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["kind"], "error");
        assert_eq!(value["message"], "unknown command: foo");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
