//! Native JSON-like values accepted by the encoder and produced by the decoder.

use crate::error::{index_path, key_path, Result, TermError, ROOT};
use serde::Serialize;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Closed set of data shapes the term encoding can represent.
///
/// Maps are ordered by key, so two maps compare equal whenever they hold the
/// same key/value pairs regardless of the order they were built in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum NativeValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<NativeValue>),
    Map(BTreeMap<String, NativeValue>),
}

impl NativeValue {
    /// Converts any serializable value through its JSON form.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let json = serde_json::to_value(value)
            .map_err(|e| TermError::unsupported(ROOT, format!("cannot serialize value: {}", e)))?;
        Self::from_json_at(&json, ROOT)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            NativeValue::Null => "null",
            NativeValue::Bool(_) => "bool",
            NativeValue::Int(_) => "integer",
            NativeValue::Str(_) => "string",
            NativeValue::List(_) => "array",
            NativeValue::Map(_) => "map",
        }
    }

    fn from_json_at(value: &Value, path: &str) -> Result<Self> {
        Ok(match value {
            Value::Null => NativeValue::Null,
            Value::Bool(b) => NativeValue::Bool(*b),
            Value::Number(n) => NativeValue::Int(integer_of(n, path)?),
            Value::String(s) => NativeValue::Str(s.clone()),
            Value::Array(items) => NativeValue::List(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| Self::from_json_at(item, &index_path(path, i)))
                    .collect::<Result<_>>()?,
            ),
            Value::Object(map) => NativeValue::Map(
                map.iter()
                    .map(|(k, v)| {
                        Self::from_json_at(v, &key_path(path, k)).map(|native| (k.clone(), native))
                    })
                    .collect::<Result<_>>()?,
            ),
        })
    }
}

fn integer_of(n: &Number, path: &str) -> Result<i64> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if n.is_u64() {
        return Err(TermError::unsupported(
            path,
            format!("integer {} does not fit in a signed 64-bit literal", n),
        ));
    }
    Err(TermError::unsupported(
        path,
        format!("non-integer number {}", n),
    ))
}

impl TryFrom<&Value> for NativeValue {
    type Error = TermError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json_at(value, ROOT)
    }
}

impl TryFrom<Value> for NativeValue {
    type Error = TermError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json_at(&value, ROOT)
    }
}

impl From<NativeValue> for Value {
    fn from(value: NativeValue) -> Self {
        match value {
            NativeValue::Null => Value::Null,
            NativeValue::Bool(b) => Value::Bool(b),
            NativeValue::Int(i) => Value::Number(i.into()),
            NativeValue::Str(s) => Value::String(s),
            NativeValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            NativeValue::Map(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Bool(value)
    }
}

impl From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        NativeValue::Int(value)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        NativeValue::Int(value.into())
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::Str(value.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        NativeValue::Str(value)
    }
}

impl From<Vec<NativeValue>> for NativeValue {
    fn from(value: Vec<NativeValue>) -> Self {
        NativeValue::List(value)
    }
}

impl From<BTreeMap<String, NativeValue>> for NativeValue {
    fn from(value: BTreeMap<String, NativeValue>) -> Self {
        NativeValue::Map(value)
    }
}

impl<T: Into<NativeValue>> From<Option<T>> for NativeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(NativeValue::Null, Into::into)
    }
}
