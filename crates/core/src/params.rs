//! Pure helper functions for extracting typed options from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail: UI collaborators hand over loosely shaped option bags
//! and always get a usable value back.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts an `f64` clamped to [0, 1], returning `default` if missing or wrong type.
pub fn param_unit(params: &Value, name: &str, default: f64) -> f64 {
    let v = param_f64(params, name, default);
    if v.is_nan() {
        default.clamp(0.0, 1.0)
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Looks `name` up under its snake_case key, then its camelCase alias.
///
/// Browser collaborators send `preserveSaturation`; Rust callers send
/// `preserve_saturation`.
pub fn param_key<'a>(params: &'a Value, snake: &str, camel: &str) -> Option<&'a Value> {
    params.get(snake).or_else(|| params.get(camel))
}
