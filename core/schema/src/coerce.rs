//! Lax coercion of raw JSON values into the declared field kinds.

use serde_json::{Map, Number, Value};

use crate::errors::{FieldError, ValidationError};
use crate::fields::{FieldKind, FieldSpec};

/// Checks `value` against `specs` and returns an object holding only the
/// declared fields, each normalised to its kind.
///
/// Every spec is checked so the error lists all offending fields.
pub(crate) fn normalize_fields(
    value: &Value,
    specs: &[FieldSpec],
) -> Result<Map<String, Value>, ValidationError> {
    let Value::Object(map) = value else {
        return Err(ValidationError::NotAnObject {
            found: json_type_name(value),
        });
    };

    let mut normalized = Map::with_capacity(specs.len());
    let mut errors = Vec::new();

    for spec in specs {
        match map.get(spec.name) {
            None => errors.push(FieldError::missing(spec.name, spec.kind)),
            Some(raw) => match coerce(spec.kind, raw) {
                Some(coerced) => {
                    normalized.insert(spec.name.to_string(), coerced);
                }
                None => errors.push(FieldError::wrong_type(spec.name, spec.kind, describe(raw))),
            },
        }
    }

    if errors.is_empty() {
        Ok(normalized)
    } else {
        Err(ValidationError::InvalidFields { errors })
    }
}

fn coerce(kind: FieldKind, value: &Value) -> Option<Value> {
    match kind {
        FieldKind::Float => coerce_float(value),
        FieldKind::Integer => coerce_integer(value),
        FieldKind::Boolean => coerce_boolean(value),
    }
}

fn coerce_float(value: &Value) -> Option<Value> {
    match value {
        Value::Number(_) => Some(value.clone()),
        Value::Bool(b) => Some(Value::from(if *b { 1.0 } else { 0.0 })),
        Value::String(s) => parse_finite(s).and_then(Number::from_f64).map(Value::Number),
        _ => None,
    }
}

fn coerce_integer(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(Value::from(i));
            }
            if n.is_u64() {
                return None;
            }
            whole_number(n.as_f64()?)
        }
        Value::Bool(b) => Some(Value::from(i64::from(*b))),
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => Some(Value::from(i)),
            Err(_) => whole_number(parse_finite(s)?),
        },
        _ => None,
    }
}

#[allow(clippy::float_cmp)]
fn coerce_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::Bool(_) => Some(value.clone()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Some(Value::Bool(false)),
            Some(f) if f == 1.0 => Some(Value::Bool(true)),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" | "yes" | "y" | "on" => Some(Value::Bool(true)),
            "false" | "f" | "0" | "no" | "n" | "off" => Some(Value::Bool(false)),
            _ => None,
        },
        _ => None,
    }
}

/// Non-finite values have no JSON representation and are rejected.
fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn whole_number(f: f64) -> Option<Value> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then(|| Value::from(f as i64))
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        other => json_type_name(other).to_string(),
    }
}
