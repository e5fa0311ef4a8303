//! Validate command for the riskkit CLI.
//!
//! Checks a JSON document against the scoring contract without running any
//! model, reporting every missing or mistyped field.
//!
//! ## Usage
//!
//! ```bash
//! riskkit validate customer.json                    # Feature record (default)
//! riskkit validate response.json --kind response    # Prediction response
//! cat customer.json | riskkit validate -            # Read from stdin
//! ```

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use riskkit_schema::{
    CUSTOMER_FIELDS, CustomerData, PredictionResponse, RESPONSE_FIELDS, ValidationError,
};
use std::fmt::{self, Display, Formatter};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::errors::RiskkitError;

/// Which record shape to validate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    /// Feature record sent to the scoring endpoint.
    Customer,
    /// Response returned by the scoring endpoint.
    Response,
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Customer => write!(f, "customer"),
            RecordKind::Response => write!(f, "response"),
        }
    }
}

/// Arguments for the `validate` command.
#[derive(Args)]
pub struct ValidateArgs {
    /// JSON file to validate, or `-` to read from stdin.
    pub input: PathBuf,

    /// Record shape to validate against.
    #[clap(long, value_enum, default_value_t = RecordKind::Customer)]
    pub kind: RecordKind,
}

/// Executes the `validate` command.
///
/// # Errors
///
/// Returns an error if:
/// - The input cannot be read
/// - The input is not a JSON object
/// - Any declared field is missing or mistyped ([`RiskkitError::ValidationFailed`])
pub fn execute(args: &ValidateArgs) -> Result<()> {
    let input = read_input(&args.input)?;

    match check(&input, args.kind) {
        Ok(fields) => {
            println!("Valid {} record ({fields} fields)", args.kind);
            Ok(())
        }
        Err(ValidationError::InvalidFields { errors }) => {
            eprintln!("Invalid {} record:", args.kind);
            for error in &errors {
                eprintln!("  {error}");
            }
            Err(RiskkitError::validation_failed(errors.len()).into())
        }
        Err(err) => Err(err).with_context(|| {
            format!("Failed to validate {}", args.input.display())
        }),
    }
}

/// Validates `input` and returns the number of declared fields checked.
fn check(input: &str, kind: RecordKind) -> Result<usize, ValidationError> {
    match kind {
        RecordKind::Customer => {
            let record = CustomerData::from_json_str(input)?;
            tracing::debug!(features = record.to_feature_vector().len(), "customer record accepted");
            Ok(CUSTOMER_FIELDS.len())
        }
        RecordKind::Response => {
            let response = PredictionResponse::from_json_str(input)?;
            tracing::debug!(
                risk_probability = response.risk_probability,
                is_high_risk = response.is_high_risk,
                "response record accepted"
            );
            Ok(RESPONSE_FIELDS.len())
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| RiskkitError::io_error("Failed to read stdin", e))?;
        return Ok(buffer);
    }

    if !path.exists() {
        return Err(RiskkitError::file_not_found(path.to_path_buf()).into());
    }

    std::fs::read_to_string(path).map_err(|e| {
        RiskkitError::io_error(format!("Failed to read {}", path.display()), e).into()
    })
}
