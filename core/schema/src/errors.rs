//! Validation failures for inbound records.

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::fields::FieldKind;

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    /// The field is present but its value cannot be coerced to the expected kind.
    WrongType {
        found: String,
    },
}

/// A single offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub expected: FieldKind,
    pub problem: FieldProblem,
}

impl FieldError {
    #[must_use]
    pub fn missing(field: &'static str, expected: FieldKind) -> Self {
        Self {
            field,
            expected,
            problem: FieldProblem::Missing,
        }
    }

    #[must_use]
    pub fn wrong_type(field: &'static str, expected: FieldKind, found: impl Into<String>) -> Self {
        Self {
            field,
            expected,
            problem: FieldProblem::WrongType {
                found: found.into(),
            },
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Missing => {
                write!(f, "{}: field required (expected {})", self.field, self.expected)
            }
            FieldProblem::WrongType { found } => write!(
                f,
                "{}: expected {}, found {found}",
                self.field, self.expected
            ),
        }
    }
}

/// Rejection of an inbound payload.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("{} invalid field(s): {}", .errors.len(), join_errors(.errors))]
    InvalidFields { errors: Vec<FieldError> },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidationError {
    /// The offending fields, empty for structural failures.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ValidationError::InvalidFields { errors } => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_displays_expected_kind() {
        let err = FieldError::missing("num__Amount", FieldKind::Float);
        assert_eq!(err.to_string(), "num__Amount: field required (expected float)");
    }

    #[test]
    fn wrong_type_displays_found_value() {
        let err = FieldError::wrong_type("time__TransactionHour", FieldKind::Integer, "number 1.5");
        assert_eq!(
            err.to_string(),
            "time__TransactionHour: expected integer, found number 1.5"
        );
    }

    #[test]
    fn invalid_fields_lists_every_error() {
        let err = ValidationError::InvalidFields {
            errors: vec![
                FieldError::missing("num__Amount", FieldKind::Float),
                FieldError::wrong_type("is_high_risk", FieldKind::Boolean, "null"),
            ],
        };
        let message = err.to_string();
        assert!(message.starts_with("2 invalid field(s): "));
        assert!(message.contains("num__Amount: field required"));
        assert!(message.contains("is_high_risk: expected boolean, found null"));
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn not_an_object_has_no_field_errors() {
        let err = ValidationError::NotAnObject { found: "array" };
        assert_eq!(err.to_string(), "expected a JSON object, found array");
        assert!(err.field_errors().is_empty());
    }
}
