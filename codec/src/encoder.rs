//! Native value → term AST.

use crate::ast::{Send, Term};
use crate::error::Result;
use crate::native::NativeValue;
use serde::Serialize;

/// Encodes a native value into its term representation.
///
/// Map entries become sends ordered ascending by key, so equal maps always
/// produce identical terms (and identical wire bytes).
pub fn encode(value: &NativeValue) -> Term {
    tracing::trace!(kind = value.type_name(), "encoding native value");
    encode_value(value)
}

fn encode_value(value: &NativeValue) -> Term {
    match value {
        NativeValue::Null => Term::Nil,
        NativeValue::Bool(b) => Term::bool(*b),
        NativeValue::Int(i) => Term::int(*i),
        NativeValue::Str(s) => Term::string(s.as_str()),
        NativeValue::List(items) => Term::ListLiteral(items.iter().map(encode_value).collect()),
        // BTreeMap iterates in ascending key order.
        NativeValue::Map(map) => Term::ParallelSends(
            map.iter()
                .map(|(key, value)| Send::entry(key.as_str(), encode_value(value)))
                .collect(),
        ),
    }
}

/// Encodes a JSON value, rejecting numbers that are not 64-bit integers.
pub fn encode_json(value: &serde_json::Value) -> Result<Term> {
    NativeValue::try_from(value).map(|native| encode(&native))
}

/// Encodes any serializable value through its JSON form.
pub fn encode_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Term> {
    NativeValue::from_serialize(value).map(|native| encode(&native))
}
