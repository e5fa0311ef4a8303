#![warn(clippy::pedantic)]

//! # riskkit
//!
//! Tooling for a credit-risk scoring project: generates the project skeleton
//! and checks records against the scoring endpoint's contract.
//!
//! ## Subcommands
//!
//! - `scaffold` - Generate the project directory structure
//! - `validate` - Validate a feature record or prediction response
//! - `fields` - List the feature record fields
//! - `version` - Display version information
//!
//! ## Examples
//!
//! Scaffold a new project:
//! ```bash
//! riskkit scaffold ./credit-risk
//! ```
//!
//! Check a request body before sending it:
//! ```bash
//! riskkit validate customer.json
//! ```

mod commands;
mod errors;
mod logging;
mod project;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{fields, scaffold, validate, version};
use errors::{RiskkitError, VALIDATION_EXIT_CODE};

/// Credit-risk project tooling.
#[derive(Parser)]
#[command(
    name = "riskkit",
    author,
    version,
    about = "Scaffolding and contract checks for credit-risk scoring projects",
    after_help = "\
ENVIRONMENT VARIABLES:
    RISKKIT_LOG             Diagnostic log filter, e.g. 'debug' (default: warn)"
)]
pub struct Cli {
    /// Diagnostic log filter written to stderr.
    #[clap(
        long = "log",
        global = true,
        env = "RISKKIT_LOG",
        default_value = logging::DEFAULT_FILTER
    )]
    pub log: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the riskkit CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the credit-risk project structure.
    ///
    /// Creates notebooks, source, test and CI directories with placeholder
    /// files under PATH. Safe to run again on an existing project.
    Scaffold(scaffold::ScaffoldArgs),

    /// Validate a JSON record against the scoring contract.
    ///
    /// Reports every missing or mistyped field. Exits with code 2 when the
    /// record is rejected.
    Validate(validate::ValidateArgs),

    /// List the feature record fields.
    ///
    /// Fields are shown in declared order together with their group and
    /// expected kind.
    Fields(fields::FieldsArgs),

    /// Display version information.
    Version(version::VersionArgs),
}

fn main() {
    if let Err(e) = run() {
        let exit_code = handle_error(&e);
        std::process::exit(exit_code);
    }
}

/// Prints an error and returns the process exit code.
///
/// Contract rejections exit with [`VALIDATION_EXIT_CODE`] so scripts can tell
/// bad data from operational failures.
fn handle_error(e: &anyhow::Error) -> i32 {
    if let Some(err @ RiskkitError::ValidationFailed { .. }) = e.downcast_ref::<RiskkitError>() {
        eprintln!("Error: {err}");
        return VALIDATION_EXIT_CODE;
    }
    eprintln!("Error: {e:?}");
    1
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log);

    match cli.command {
        Some(Commands::Scaffold(args)) => scaffold::execute(&args),
        Some(Commands::Validate(args)) => validate::execute(&args),
        Some(Commands::Fields(args)) => fields::execute(&args),
        Some(Commands::Version(args)) => version::execute(&args),
        None => {
            println!("riskkit: credit-risk project tooling");
            println!();
            println!("Run 'riskkit --help' for usage information.");
            println!("Run 'riskkit scaffold' to generate a project in the current directory.");
            Ok(())
        }
    }
}
