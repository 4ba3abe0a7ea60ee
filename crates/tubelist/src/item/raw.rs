//! Raw key/value payload backing an item.

use serde_json::{Number, Value};

/// An opaque record as delivered by the data source.
///
/// Lookups never fail: a missing key, a missing nested object or a value
/// of the wrong type all resolve to "absent".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawItem {
    /// Underlying JSON payload.
    data: Value,
}

impl RawItem {
    /// Wraps a raw payload.
    #[must_use]
    pub const fn new(data: Value) -> Self {
        Self { data }
    }

    /// Returns the top-level value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Walks nested objects along `path`.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.data, |value, key| value.get(*key))
    }

    /// Returns the value under `key`, or `default` when it is absent or falsy.
    ///
    /// Falsy follows the loose convention of the upstream data: `null`,
    /// `false`, zero, `""`, `[]` and `{}` all select the default.
    #[must_use]
    pub fn get_with_default<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        match self.get(key) {
            Some(value) if !is_falsy(value) => value,
            _ => default,
        }
    }

    /// Returns the string at `path`, or `""` when absent or not a string.
    #[must_use]
    pub fn text(&self, path: &[&str]) -> &str {
        self.get_path(path).and_then(Value::as_str).unwrap_or_default()
    }
}

/// Whether `n` is exactly zero; any other magnitude, however small, is not.
#[allow(clippy::float_cmp)]
fn is_zero(n: &Number) -> bool {
    n.as_u64() == Some(0) || n.as_i64() == Some(0) || n.as_f64() == Some(0.0)
}

/// Reports whether a JSON value counts as "empty".
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => is_zero(n),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
