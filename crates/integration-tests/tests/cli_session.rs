//! Integration tests for scripted CLI sessions and YAML seeding.

#![allow(clippy::unwrap_used)]

use address_registry::AddressRegistry;
use address_registry_cli::{OutputFormat, Session, seed::{self, SeedFile}};
use address_registry_integration_tests::{fixed_clock, fixed_instant};

const SCRIPT: &str = "\
set name Ana
set street Main St
set number 10
set neighborhood Centro
set city Springfield
set state SP
set postalCode 00000-000
register
set name Bia
set street main st
set number 10
set neighborhood Norte
set city Springfield
set state SP
set postalCode 00000-000
register
set number 12
register
deactivate #1
delete #2
cancel
delete #2
confirm
show
";

fn run(format: OutputFormat) -> (Session<address_registry::FixedClock>, String) {
    let mut session =
        Session::with_registry(AddressRegistry::with_clock(fixed_clock()), format);
    let mut out = Vec::new();
    session
        .run(SCRIPT.as_bytes(), &mut out)
        .unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn test_scripted_session_final_state() {
    let (session, _) = run(OutputFormat::Table);
    let registry = session.registry();

    assert_eq!(registry.len(), 1);
    let remaining = registry.addresses().first().unwrap();
    assert_eq!(remaining.name(), "Ana");
    assert!(!remaining.is_active());
    assert!(!registry.is_confirm_visible());
}

#[test]
fn test_scripted_session_table_output() {
    let (_, text) = run(OutputFormat::Table);

    assert!(text.contains("Error: Address already registered"));
    assert!(text.contains("Addresses (2):"));
    assert!(text.contains("? (confirm / cancel)"));
    assert!(text.trim_end().ends_with(&format!(
        "Springfield/SP - Postal code: 00000-000  (created {})",
        fixed_instant().to_rfc3339()
    )));
}

#[test]
fn test_scripted_session_json_output() {
    let (_, text) = run(OutputFormat::Json);

    let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();

    assert_eq!(last["addresses"].as_array().map(Vec::len), Some(1));
    assert_eq!(last["addresses"][0]["active"], false);
    assert_eq!(last["addresses"][0]["registered"], true);
    assert_eq!(last["addresses"][0]["createdAt"], "2026-10-16T12:00:00Z");
    assert_eq!(last["pendingDeletion"]["confirmVisible"], false);
    assert_eq!(last["error"]["active"], false);
}

#[test]
fn test_seed_then_session() {
    let file = SeedFile::parse(
        r#"
addresses:
  - name: Ana
    street: Main St
    number: "10"
    neighborhood: Centro
    city: Springfield
    state: SP
    postalCode: 00000-000
  - name: Bia
    street: Main St
    number: "10"
    neighborhood: Centro
    city: Springfield
    state: SP
    postalCode: 00000-000
"#,
    )
    .unwrap();

    let mut registry = AddressRegistry::with_clock(fixed_clock());
    let report = seed::apply(&mut registry, file);
    assert_eq!(report.registered(), 1);
    assert_eq!(report.rejected(), 1);
    assert_eq!(registry.error().message(), Some("Address already registered"));

    let mut session = Session::with_registry(registry, OutputFormat::Table);
    let mut out = Vec::new();
    session
        .run("delete #1\nconfirm\n".as_bytes(), &mut out)
        .unwrap();
    assert!(session.registry().is_empty());
}
