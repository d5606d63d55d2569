//! `serde_json` payloads as records.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::{FieldValue, Record, ToFieldValue};

/// Objects are records; every other JSON value is a non-composite root and
/// resolves no fields.
impl Record for Value {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.as_object()?.field(name)
    }

    fn field_names(&self) -> Vec<&str> {
        self.as_object().map(Record::field_names).unwrap_or_default()
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(ToFieldValue::to_field_value)
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn to_text(&self) -> String {
        // Map has no Display of its own.
        Value::Object(self.clone()).to_string()
    }
}

impl ToFieldValue for Value {
    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::UInt(u)
                } else {
                    n.as_f64().map_or(FieldValue::Null, FieldValue::Float)
                }
            }
            Value::String(s) => FieldValue::Str(Cow::Borrowed(s.as_str())),
            Value::Array(items) => {
                FieldValue::List(items.iter().map(ToFieldValue::to_field_value).collect())
            }
            Value::Object(_) => FieldValue::Record(self),
        }
    }
}
