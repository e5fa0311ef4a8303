//! Scaffold command for the riskkit CLI.
//!
//! Lays out the directory skeleton of a credit-risk modeling project.
//!
//! ## Usage
//!
//! ```bash
//! riskkit scaffold                 # Scaffold the current directory
//! riskkit scaffold ./credit-risk   # Scaffold (and create) another directory
//! ```
//!
//! ## Project Structure
//!
//! ```text
//! .
//! +-- .github/workflows/ci.yml
//! +-- data/{raw,processed}/
//! +-- notebooks/           01..04 notebooks, README.md
//! +-- src/                 data_processing.py, train.py, predict.py
//! |   +-- api/             main.py, pydantic_models.py
//! +-- tests/               test_data_processing.py, test_models.py
//! +-- Dockerfile, docker-compose.yml, requirements.txt, .gitignore, README.md
//! ```
//!
//! Running it again on a populated directory is safe; see
//! [`crate::project::scaffold`] for what gets rewritten.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::project::{ScaffoldEvent, generate_project_structure};

/// Arguments for the `scaffold` command.
#[derive(Args)]
pub struct ScaffoldArgs {
    /// Directory to scaffold (created if missing).
    #[clap(default_value = ".")]
    pub path: PathBuf,
}

/// Executes the `scaffold` command, printing one line per created path.
///
/// # Errors
///
/// Returns an error if any directory or file cannot be created. Paths
/// created before the failure are left in place.
pub fn execute(args: &ScaffoldArgs) -> Result<()> {
    let report = generate_project_structure(&args.path, |event| match event {
        ScaffoldEvent::Started { root } => {
            println!();
            println!("Creating project structure at: {}", root.display());
            println!();
        }
        ScaffoldEvent::DirectoryCreated(path) => {
            println!("Created directory: {}", path.display());
        }
        ScaffoldEvent::FileCreated(path) => println!("Created file: {}", path.display()),
    })?;

    tracing::debug!(
        root = %report.root.display(),
        directories = report.directories.len(),
        files = report.files.len(),
        "scaffold complete"
    );

    println!();
    println!("Project structure created successfully!");

    Ok(())
}
