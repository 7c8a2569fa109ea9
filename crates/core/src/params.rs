//! Lenient typed lookups on a JSON settings object.
//!
//! A missing key or a value of the wrong type yields the default. These never
//! fail; range checks happen afterwards in [`NoiseConfig::validate`](crate::config::NoiseConfig::validate).

use serde_json::Value;

/// Reads `params[name]` as `f64` (integers accepted), or `default`.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Reads `params[name]` as `bool`, or `default`.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}
