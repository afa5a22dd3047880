//! Address Registry CLI - drive the address registry from a terminal or script.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (commands on stdin)
//! addr-cli session
//!
//! # Replay a script of session commands
//! addr-cli session --script demo.txt
//!
//! # Register every address listed in a YAML file and print the result as JSON
//! addr-cli --format json seed addresses.yaml
//! ```
//!
//! # Commands
//!
//! - `session` - Read-eval-render loop over the registry
//! - `seed` - Bulk registration from YAML

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use address_registry::AddressRegistry;
use address_registry_cli::{
    CliConfig, LogFormat, OutputFormat, Session, render,
    seed::{self, SeedFile, SeedOutcome},
};

#[derive(Parser)]
#[command(name = "addr-cli")]
#[command(author, version, about = "Address registry CLI tools")]
struct Cli {
    /// Output format (overrides `ADDR_CLI_FORMAT`)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command session (stdin unless --script is given)
    Session {
        /// File of session commands to replay
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
    /// Register addresses from a YAML file
    Seed {
        /// Path to the YAML seed file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&CliConfig::default());
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config);

    let config = config.with_format_override(cli.format);
    let result: Result<(), Box<dyn std::error::Error>> = run(cli.command, config.format);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries rendered registry state.
///
/// `config.log_filter` has already been validated by `CliConfig::from_lookup`.
fn init_tracing(config: &CliConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            )
            .init(),
    }
}

fn run(command: Commands, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Session { script } => {
            let mut session = Session::new(format);
            session
                .registry_mut()
                .subscribe(|event| tracing::debug!(?event, "Registry changed"));

            match script {
                Some(path) => {
                    tracing::info!(path = %path.display(), "Replaying session script");
                    let file = File::open(&path)
                        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
                    session.run(BufReader::new(file), &mut out)?;
                }
                None => session.run(io::stdin().lock(), &mut out)?,
            }
        }
        Commands::Seed { file } => {
            tracing::info!(path = %file.display(), "Loading seed file");
            let seed_file = SeedFile::load(&file)?;

            let mut registry = AddressRegistry::new();
            let report = seed::apply(&mut registry, seed_file);

            for (index, outcome) in report.outcomes.iter().enumerate() {
                let text = match outcome {
                    SeedOutcome::Registered(id) => format!("entry {}: registered {id}", index + 1),
                    SeedOutcome::Rejected(error) => format!("entry {}: {error}", index + 1),
                };
                render::message(&mut out, format, "seed", &text)?;
            }
            render::addresses(&mut out, format, registry.addresses())?;
        }
    }

    out.flush()?;
    Ok(())
}
