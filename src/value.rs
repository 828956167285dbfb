// model = "claude-opus-4-5"
// created = "2026-08-04"
// modified = "2026-08-05"
// driver = "Isaac Clayton"

//! Semi-structured values the ordering engine operates on.
//!
//! A `Value` is a scalar, a sequence, or a keyed map. The engine only ever
//! reads values through this module: truthiness for the short-circuit and
//! fallback rules, and single-segment field lookup for path resolution.

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;

/// A dynamically shaped value: scalar, sequence, or keyed map.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// An IEEE double. `NaN` is allowed and never equal to itself.
    Number(f64),
    Text(String),
    /// A point in time. The default comparator orders these by timestamp.
    Date(DateTime<Utc>),
    Sequence(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Truthiness as the engine's host conventions define it: `Null`, `false`,
    /// zero, `NaN`, and the empty string are falsy; dates, sequences, and
    /// maps (even empty ones) are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => *number != 0.0 && !number.is_nan(),
            Value::Text(text) => !text.is_empty(),
            Value::Date(_) => true,
            Value::Sequence(_) => true,
            Value::Map(_) => true,
        }
    }

    /// Look up a single path segment: a key on a map, or a decimal index
    /// into a sequence. Scalars have no fields.
    pub fn get(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Map(fields) => fields.get(segment),
            Value::Sequence(items) => {
                let index = segment.parse::<usize>().ok()?;
                items.get(index)
            }
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, segment: &str) -> Option<&mut Value> {
        match self {
            Value::Map(fields) => fields.get_mut(segment),
            Value::Sequence(items) => {
                let index = segment.parse::<usize>().ok()?;
                items.get_mut(index)
            }
            _ => None,
        }
    }

    /// Assign at a single segment. Unknown locations are left alone; the
    /// engine only writes back where it already resolved a value.
    pub(crate) fn set(&mut self, segment: &str, value: Value) {
        match self {
            Value::Map(fields) => {
                fields.insert(segment.to_string(), value);
            }
            Value::Sequence(items) => {
                if let Some(slot) = segment.parse::<usize>().ok().and_then(|index| items.get_mut(index)) {
                    *slot = value;
                }
            }
            _ => {}
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Value {
        return Value::Bool(flag);
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Value {
        return Value::Number(number);
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Value {
        return Value::Number(number as f64);
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Value {
        return Value::Number(number as f64);
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Value {
        return Value::Text(text.to_string());
    }
}

impl From<String> for Value {
    fn from(text: String) -> Value {
        return Value::Text(text);
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Value {
        return Value::Date(date);
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        return Value::Sequence(items);
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Value {
        return Value::Map(fields);
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            // Arbitrary-precision integers coerce through f64.
            serde_json::Value::Number(number) => Value::Number(number.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => {
                Value::Map(fields.into_iter().map(|(key, value)| (key, Value::from(value))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> serde_json::Value {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(flag) => serde_json::Value::Bool(flag),
            // Non-finite doubles have no JSON form and become null.
            Value::Number(number) => serde_json::Number::from_f64(number)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(text) => serde_json::Value::String(text),
            Value::Date(date) => {
                serde_json::Value::String(date.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(fields) => serde_json::Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}
