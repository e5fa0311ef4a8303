//! Command modules for the riskkit CLI.
//!
//! ## Project Commands
//!
//! - [`scaffold`] - Generate the credit-risk project skeleton
//!
//! ## Contract Commands
//!
//! - [`validate`] - Check a JSON record against the scoring contract
//! - [`fields`] - List the feature record fields
//!
//! ## Other
//!
//! - [`version`] - Display version information

pub mod fields;
pub mod scaffold;
pub mod validate;
pub mod version;
