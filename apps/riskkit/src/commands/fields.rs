//! Fields command for the riskkit CLI.
//!
//! Lists the feature record's fields in declared order, which is also the
//! order of the model's input vector.
//!
//! ## Usage
//!
//! ```bash
//! riskkit fields               # All 51 fields
//! riskkit fields --group time  # Only time-derived fields
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use riskkit_schema::{CUSTOMER_FIELDS, FeatureGroup, FieldSpec};

/// Feature group filter, named after the field prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupFilter {
    Num,
    Cat,
    Time,
    Agg,
}

impl From<GroupFilter> for FeatureGroup {
    fn from(filter: GroupFilter) -> Self {
        match filter {
            GroupFilter::Num => FeatureGroup::Numeric,
            GroupFilter::Cat => FeatureGroup::Categorical,
            GroupFilter::Time => FeatureGroup::Time,
            GroupFilter::Agg => FeatureGroup::Aggregate,
        }
    }
}

/// Arguments for the `fields` command.
#[derive(Args)]
pub struct FieldsArgs {
    /// Only list fields of this group.
    #[clap(long, value_enum)]
    pub group: Option<GroupFilter>,
}

/// Executes the `fields` command.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(args: &FieldsArgs) -> Result<()> {
    let selected = select(args.group.map(FeatureGroup::from));

    for (index, spec) in &selected {
        let group = spec
            .group()
            .map_or_else(|| String::from("-"), |g| g.to_string());
        println!("{index:>3}  {:<42} {group:<5} {}", spec.name, spec.kind);
    }
    println!();
    println!("{} field(s)", selected.len());

    Ok(())
}

/// Fields matching `group` paired with their feature-vector index.
fn select(group: Option<FeatureGroup>) -> Vec<(usize, &'static FieldSpec)> {
    CUSTOMER_FIELDS
        .iter()
        .enumerate()
        .filter(|(_, spec)| group.is_none() || spec.group() == group)
        .collect()
}
