//! Line-oriented session over an address registry.
//!
//! # Commands
//!
//! - `set <field> <value>` - edit one draft field (`"..."` keeps surrounding
//!   whitespace; no value sets the field to empty)
//! - `register` - register the draft
//! - `deactivate <target>` - mark an address inactive
//! - `delete <target>` - ask to delete an address
//! - `confirm` / `cancel` - answer the pending delete
//! - `list` - show the address list
//! - `show` - show the whole state
//! - `help` - list commands
//!
//! A `<target>` is either an address id or `#N`, the 1-based position in the
//! list. Blank lines and lines starting with `#` are ignored.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, warn};

use address_registry::{
    AddressField, AddressFieldError, AddressId, AddressIdError, AddressRegistry, Clock,
    SystemClock,
};

use crate::render::{self, OutputFormat};

const HELP: &str = "\
Commands:
  set <field> <value>   edit a draft field (name, street, number, neighborhood, city, state, postalCode)
  register              register the current draft
  deactivate <target>   mark an address inactive (target: id or #position)
  delete <target>       ask to delete an address
  confirm               confirm the pending delete
  cancel                cancel the pending delete
  list                  show registered addresses
  show                  show draft, error, addresses and pending delete
  help                  show this help";

/// Errors from parsing or running a session command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument for {command}: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unexpected argument for {command}: {argument}")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error(transparent)]
    Field(#[from] AddressFieldError),

    #[error(transparent)]
    Id(#[from] AddressIdError),

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("no address at position {0}")]
    NoSuchPosition(usize),
}

/// Which address a command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Id(AddressId),
    /// 1-based position in the address list.
    Position(usize),
}

impl std::str::FromStr for Target {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(position) = s.strip_prefix('#') {
            return match position.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Self::Position(n)),
                _ => Err(CommandError::InvalidPosition(s.to_owned())),
            };
        }
        Ok(Self::Id(s.parse()?))
    }
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set { field: AddressField, value: String },
    Register,
    Deactivate(Target),
    Delete(Target),
    Confirm,
    Cancel,
    List,
    Show,
    Help,
}

impl SessionCommand {
    /// Parse one input line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = split_word(trimmed);
        let command = match verb {
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "set",
                        expected: "<field> <value>",
                    });
                }
                Self::Set {
                    field: field.parse()?,
                    value: unquote(value).to_owned(),
                }
            }
            "register" => no_argument("register", rest, Self::Register)?,
            "deactivate" => Self::Deactivate(one_target("deactivate", rest)?),
            "delete" => Self::Delete(one_target("delete", rest)?),
            "confirm" => no_argument("confirm", rest, Self::Confirm)?,
            "cancel" => no_argument("cancel", rest, Self::Cancel)?,
            "list" => no_argument("list", rest, Self::List)?,
            "show" => no_argument("show", rest, Self::Show)?,
            "help" => Self::Help,
            other => return Err(CommandError::UnknownCommand(other.to_owned())),
        };
        Ok(Some(command))
    }
}

/// Split off the first whitespace-delimited word; the remainder keeps its
/// inner whitespace but loses the separator.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => {
            let (word, rest) = s.split_at(end);
            (word, rest.trim_start())
        }
        None => (s, ""),
    }
}

fn unquote(value: &str) -> &str {
    let value = value.trim_end();
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn no_argument(
    command: &'static str,
    rest: &str,
    parsed: SessionCommand,
) -> Result<SessionCommand, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::UnexpectedArgument {
            command,
            argument: rest.to_owned(),
        })
    }
}

fn one_target(command: &'static str, rest: &str) -> Result<Target, CommandError> {
    let (target, extra) = split_word(rest);
    if target.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "<id or #position>",
        });
    }
    if !extra.trim().is_empty() {
        return Err(CommandError::UnexpectedArgument {
            command,
            argument: extra.trim().to_owned(),
        });
    }
    target.parse()
}

/// What to render after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Draft, notice, address list and delete prompt.
    State,
    /// Only the address list.
    Addresses,
    Help,
}

/// A registry plus the output format used to show it.
#[derive(Debug)]
pub struct Session<C = SystemClock> {
    registry: AddressRegistry<C>,
    format: OutputFormat,
}

impl Session {
    /// Start a session with an empty registry.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self::with_registry(AddressRegistry::new(), format)
    }
}

impl<C: Clock> Session<C> {
    /// Start a session over an existing registry.
    pub fn with_registry(registry: AddressRegistry<C>, format: OutputFormat) -> Self {
        Self { registry, format }
    }

    #[must_use]
    pub const fn registry(&self) -> &AddressRegistry<C> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AddressRegistry<C> {
        &mut self.registry
    }

    fn resolve(&self, target: Target) -> Result<AddressId, CommandError> {
        match target {
            Target::Id(id) => Ok(id),
            Target::Position(n) => n
                .checked_sub(1)
                .and_then(|index| self.registry.addresses().get(index))
                .map(address_registry::Address::id)
                .ok_or(CommandError::NoSuchPosition(n)),
        }
    }

    /// Apply one command to the registry and say what to show next.
    ///
    /// Registration failures are not errors here: they land in the
    /// registry's notice and are rendered with the state.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NoSuchPosition`] if a `#N` target does not
    /// exist.
    pub fn apply(&mut self, command: SessionCommand) -> Result<View, CommandError> {
        debug!(?command, "Executing command");
        let view = match command {
            SessionCommand::Set { field, value } => {
                self.registry.update_draft_field(field, value);
                View::State
            }
            SessionCommand::Register => {
                if let Err(error) = self.registry.register() {
                    debug!(%error, "Registration rejected");
                }
                View::State
            }
            SessionCommand::Deactivate(target) => {
                let id = self.resolve(target)?;
                self.registry.deactivate(id);
                View::State
            }
            SessionCommand::Delete(target) => {
                let id = self.resolve(target)?;
                self.registry.request_deletion(id);
                View::State
            }
            SessionCommand::Confirm => {
                self.registry.confirm_deletion();
                View::State
            }
            SessionCommand::Cancel => {
                self.registry.cancel_deletion();
                View::State
            }
            SessionCommand::Show => View::State,
            SessionCommand::List => View::Addresses,
            SessionCommand::Help => View::Help,
        };
        Ok(view)
    }

    /// Write `view` in the session's output format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn render<W: Write>(&self, view: View, out: &mut W) -> io::Result<()> {
        match view {
            View::State => render::snapshot(out, self.format, &self.registry.snapshot()),
            View::Addresses => render::addresses(out, self.format, self.registry.addresses()),
            View::Help => render::message(out, self.format, "help", HELP),
        }
    }

    /// Read commands until end of input, rendering after each one.
    ///
    /// Bad commands are reported on `out` and the session continues.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut buf = Vec::new();
        let mut number = 0_usize;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            number += 1;

            // Invalid UTF-8 is replaced and then fails to parse as a command.
            let line = String::from_utf8_lossy(&buf);
            let result = SessionCommand::parse(&line).and_then(|command| {
                command.map(|command| self.apply(command)).transpose()
            });

            match result {
                Ok(Some(view)) => self.render(view, out)?,
                Ok(None) => {}
                Err(error) => {
                    warn!(line = number, %error, "Command rejected");
                    render::message(out, self.format, "error", &format!("error: {error}"))?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }
}
