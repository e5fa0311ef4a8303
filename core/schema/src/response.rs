//! The scoring response and the policy that derives its high-risk flag.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::normalize_fields;
use crate::errors::ValidationError;
use crate::fields::{FieldKind, FieldSpec};

/// Response record fields in declared order.
pub const RESPONSE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("risk_probability", FieldKind::Float),
    FieldSpec::new("is_high_risk", FieldKind::Boolean),
];

/// Result of scoring one [`CustomerData`](crate::CustomerData) record.
///
/// `risk_probability` is expected in `[0, 1]` but the range is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub risk_probability: f64,
    pub is_high_risk: bool,
}

/// Decides whether a risk probability counts as high risk.
///
/// The cut-off is a business decision owned by the caller; this crate ships
/// no default.
pub trait HighRiskPolicy {
    fn is_high_risk(&self, risk_probability: f64) -> bool;
}

impl<F> HighRiskPolicy for F
where
    F: Fn(f64) -> bool,
{
    fn is_high_risk(&self, risk_probability: f64) -> bool {
        self(risk_probability)
    }
}

/// Flags every probability at or above `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityThreshold {
    pub threshold: f64,
}

impl ProbabilityThreshold {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl HighRiskPolicy for ProbabilityThreshold {
    fn is_high_risk(&self, risk_probability: f64) -> bool {
        risk_probability >= self.threshold
    }
}

impl PredictionResponse {
    #[must_use]
    pub const fn new(risk_probability: f64, is_high_risk: bool) -> Self {
        Self {
            risk_probability,
            is_high_risk,
        }
    }

    /// Builds a response whose flag is derived by `policy`.
    #[must_use]
    pub fn with_policy(risk_probability: f64, policy: &impl HighRiskPolicy) -> Self {
        Self::new(risk_probability, policy.is_high_risk(risk_probability))
    }

    /// Validates a response payload, coercing values the same way as
    /// [`CustomerData::from_json_value`](crate::CustomerData::from_json_value).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnObject`] or
    /// [`ValidationError::InvalidFields`].
    pub fn from_json_value(value: &Value) -> Result<Self, ValidationError> {
        let normalized = normalize_fields(value, RESPONSE_FIELDS)?;
        Ok(serde_json::from_value(Value::Object(normalized))?)
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Json`] for malformed JSON, otherwise the
    /// same errors as [`PredictionResponse::from_json_value`].
    pub fn from_json_str(input: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldError;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_names() {
        let response = PredictionResponse::new(0.82, true);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"risk_probability":0.82,"is_high_risk":true}"#);

        let back: PredictionResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn validates_and_coerces_payload() {
        let response =
            PredictionResponse::from_json_value(&json!({"risk_probability": "0.1", "is_high_risk": 0}))
                .unwrap();
        assert_eq!(response, PredictionResponse::new(0.1, false));
    }

    #[test]
    fn accepts_short_and_float_boolean_spellings() {
        for (raw, expected) in [
            (json!("t"), true),
            (json!("y"), true),
            (json!(1.0), true),
            (json!("F"), false),
            (json!("n"), false),
            (json!(0.0), false),
        ] {
            let response = PredictionResponse::from_json_value(
                &json!({"risk_probability": 0.3, "is_high_risk": raw}),
            )
            .unwrap();
            assert_eq!(response.is_high_risk, expected, "{raw}");
        }
    }

    #[test]
    fn rejects_missing_and_mistyped_fields() {
        let err = PredictionResponse::from_json_value(&json!({"is_high_risk": "sometimes"}))
            .unwrap_err();
        assert_eq!(
            err.field_errors(),
            [
                FieldError::missing("risk_probability", FieldKind::Float),
                FieldError::wrong_type("is_high_risk", FieldKind::Boolean, "string \"sometimes\""),
            ]
        );
    }

    #[test]
    fn probability_range_is_not_enforced() {
        let response = PredictionResponse::from_json_str(
            r#"{"risk_probability": 1.7, "is_high_risk": false}"#,
        )
        .unwrap();
        assert!((response.risk_probability - 1.7).abs() < f64::EPSILON);
    }

    #[test]
    fn threshold_policy_is_inclusive() {
        let policy = ProbabilityThreshold::new(0.5);
        assert!(PredictionResponse::with_policy(0.5, &policy).is_high_risk);
        assert!(PredictionResponse::with_policy(0.82, &policy).is_high_risk);
        assert!(!PredictionResponse::with_policy(0.49, &policy).is_high_risk);
    }

    #[test]
    fn closures_act_as_policies() {
        let never = |_: f64| false;
        let response = PredictionResponse::with_policy(0.99, &never);
        assert!(!response.is_high_risk);
        assert!((response.risk_probability - 0.99).abs() < f64::EPSILON);
    }
}
