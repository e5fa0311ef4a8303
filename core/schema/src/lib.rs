#![warn(clippy::pedantic)]

//! # Credit-risk scoring contract
//!
//! Data-transfer records exchanged with a risk-scoring prediction endpoint.
//!
//! - [`CustomerData`] - the flat numeric feature record sent to the model
//! - [`PredictionResponse`] - the probability and high-risk flag returned
//!
//! Inbound payloads are checked with [`CustomerData::from_json_value`], which
//! reports every missing or mistyped field at once instead of stopping at the
//! first failure.
//!
//! ```
//! use riskkit_schema::{PredictionResponse, ProbabilityThreshold};
//!
//! let policy = ProbabilityThreshold::new(0.5);
//! let response = PredictionResponse::with_policy(0.82, &policy);
//! assert!(response.is_high_risk);
//! ```

mod coerce;
pub mod customer;
pub mod errors;
pub mod fields;
pub mod response;

pub use customer::{CUSTOMER_FIELDS, CustomerData};
pub use errors::{FieldError, FieldProblem, ValidationError};
pub use fields::{FeatureGroup, FieldKind, FieldSpec};
pub use response::{HighRiskPolicy, PredictionResponse, ProbabilityThreshold, RESPONSE_FIELDS};
