//! Result serialization and comparison
//!
//! Test results and expected literals are compared as JSON values with
//! integral floats canonicalized, so `5.0` equals `5` the way a
//! stringified comparison would report it.

use rhai::Dynamic;
use serde_json::{Number, Value};

use super::errors::{SandboxError, SandboxResult};

/// Serialize an engine value to JSON.
pub fn to_json(value: &Dynamic) -> SandboxResult<Value> {
    rhai::serde::from_dynamic::<Value>(value).map_err(|e| SandboxError::Serialize(e.to_string()))
}

/// Compare two JSON values with numeric canonicalization.
pub fn json_eq(a: &Value, b: &Value) -> bool {
    canonical(a.clone()) == canonical(b.clone())
}

fn canonical(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(canonical_number(n)),
        Value::Array(items) => Value::Array(items.into_iter().map(canonical).collect()),
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, canonical(v))).collect())
        }
        other => other,
    }
}

fn canonical_number(n: Number) -> Number {
    if let Some(f) = n.as_f64() {
        let integral = f.is_finite() && f.fract() == 0.0 && f.abs() < (i64::MAX as f64);
        if n.is_f64() && integral {
            return Number::from(f as i64);
        }
    }
    n
}
