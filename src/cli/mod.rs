//! CLI module for the ptk name abbreviation tools
//!
//! ## Commands
//!
//! - `abbrev <TYPE>...` - Abbreviate qualified types to `alias:short` tags
//! - `resolve <NAME>...` - Resolve short names or tags back to qualified types
//! - `prefixes` - List aliases that carry a namespace URI
//! - `namespaces` - Show each namespace with the types it owns
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `manifest` - JSON registry manifests and `--namespace` parsing
//! - `getopt` - Option errors clap cannot detect
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod getopt;
pub mod manifest;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::abbrev::{NameAbbrevService, TypeDescriptor, TypeProvider};
use crate::version::PTK_VERSION;

use getopt::MissingOptionError;
use manifest::RegistryManifest;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<MissingOptionError> for CliError {
    fn from(err: MissingOptionError) -> Self {
        CliError::usage(format!("error: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Abbreviate and resolve type names against ordered namespaces
#[derive(Parser, Debug)]
#[command(name = "ptk-abbrev")]
#[command(version = PTK_VERSION)]
#[command(about = "Abbreviate and resolve type names against ordered namespaces", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Registry manifest (JSON); defaults to $PTK_MANIFEST
    #[arg(long, value_name = "FILE", global = true)]
    pub manifest: Option<PathBuf>,

    /// Namespace to abbreviate against, in priority order after the manifest's
    #[arg(short = 'n', long = "namespace", value_name = "PREFIX=ALIAS[=URI]", global = true)]
    pub namespaces: Vec<String>,

    /// Register a concrete class unless the manifest already describes it
    #[arg(short = 't', long = "type", value_name = "TYPE", global = true)]
    pub types: Vec<String>,

    /// Fall back to qualified names for types outside every namespace
    #[arg(long, global = true)]
    pub lenient: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Abbreviate qualified types (arrays as `pkg.Type[]`)
    Abbrev {
        #[arg(value_name = "TYPE", required = true)]
        names: Vec<String>,
    },

    /// Resolve short names or `alias:short` tags to qualified types
    Resolve {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// List aliases that carry a namespace URI
    Prefixes,

    /// Show each namespace with the types it owns
    Namespaces,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return its output.
pub fn execute(cli: Cli) -> CliResult<String> {
    let mut service = build_service(&cli)?;

    match &cli.command {
        Command::Abbrev { names } => commands::abbreviate_types(&mut service, names),
        Command::Resolve { names } => commands::resolve_names(&mut service, names),
        Command::Prefixes => Ok(commands::list_prefixes(&service)),
        Command::Namespaces => commands::describe_namespaces(&mut service),
    }
}

/// Merge the manifest with the command line into a service.
fn build_service(cli: &Cli) -> CliResult<NameAbbrevService> {
    let manifest = match manifest::find_manifest(cli.manifest.as_deref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading registry manifest");
            RegistryManifest::load(&path).map_err(|e| CliError::failure(format!("error: {e}")))?
        }
        None => RegistryManifest::default(),
    };

    let mut namespaces = manifest.namespaces.clone();
    for spec in &cli.namespaces {
        namespaces.push(manifest::parse_namespace(spec).map_err(|e| CliError::usage(format!("error: {e}")))?);
    }
    if namespaces.is_empty() {
        return Err(MissingOptionError::new(["manifest", "namespace"]).into());
    }

    let mut registry = manifest.registry();
    for name in &cli.types {
        if !registry.contains(name) {
            registry.register(TypeDescriptor::class(name.as_str()));
        }
    }

    let strict = !cli.lenient && manifest.strict.unwrap_or(true);
    Ok(NameAbbrevService::with_strictness(registry, namespaces, strict))
}

// ============================================================================
// Tests
// ============================================================================
