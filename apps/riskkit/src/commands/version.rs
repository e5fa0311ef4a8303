//! Version command for the riskkit CLI.
//!
//! The scoring contract is compiled into the binary, so the verbose listing
//! doubles as a record of which feature layout a given build validates
//! against.

use anyhow::Result;
use clap::Args;
use riskkit_schema::{CUSTOMER_FIELDS, FeatureGroup, RESPONSE_FIELDS};

/// Arguments for the `version` command.
#[derive(Args)]
pub struct VersionArgs {
    /// Also print the git revision, target and per-group field counts.
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

/// Revision recorded by `build.rs`.
const COMMIT: &str = env!("RISKKIT_GIT_COMMIT");

/// Executes the `version` command.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(args: &VersionArgs) -> Result<()> {
    println!("riskkit {}", env!("CARGO_PKG_VERSION"));
    if !args.verbose {
        return Ok(());
    }

    println!();
    println!("Build Information:");
    println!("  Commit:   {COMMIT}");
    println!(
        "  Target:   {}-{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    println!();
    println!("Scoring Contract:");
    println!("  Feature fields:  {}", CUSTOMER_FIELDS.len());
    for (group, count) in group_counts() {
        println!("    {:<5} {count:>3}", group.to_string());
    }
    println!("  Response fields: {}", RESPONSE_FIELDS.len());
    Ok(())
}

/// Number of feature fields in each group, in [`FeatureGroup::ALL`] order.
fn group_counts() -> Vec<(FeatureGroup, usize)> {
    FeatureGroup::ALL
        .into_iter()
        .map(|group| {
            let count = CUSTOMER_FIELDS
                .iter()
                .filter(|spec| spec.group() == Some(group))
                .count();
            (group, count)
        })
        .collect()
}
