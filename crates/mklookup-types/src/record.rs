use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One customer as returned by the source system.
///
/// Field order follows the response body. The backend sends either a single
/// object or a list holding one; [`CustomerRecord::normalize`] accepts both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerRecord(Map<String, Value>);

impl CustomerRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// First element of a list, the object itself, or `None` for anything else
    /// (null, empty list, scalars, a list whose head is not an object).
    pub fn normalize(data: &Value) -> Option<Self> {
        match data {
            Value::Array(items) => match items.first() {
                Some(Value::Object(fields)) => Some(Self(fields.clone())),
                _ => None,
            },
            Value::Object(fields) => Some(Self(fields.clone())),
            _ => None,
        }
    }

    /// Fields in their original order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Text for a field value, or `None` when the field should not be shown.
///
/// Null and whitespace-only strings are empty. Strings are kept verbatim.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
