//! Descriptors from JSON.
//!
//! JSON maps onto descriptors directly: `null` is `Null`, strings are text,
//! arrays are arrays and objects are object descriptors. Numbers and booleans
//! at descriptor position become text. Inside an object every non-reserved
//! key becomes a typed property; integers stay integers.
//!
//! `events` and `init` need callables and cannot be written in JSON. A
//! non-null value under either key is an error.

use crate::descriptor::{Descriptor, ObjectSpec};
use crate::native::NativeDocument;
use core_types::Value;
use serde_json::Map;
use std::fmt;

#[derive(Debug)]
pub enum JsonError {
    Parse(serde_json::Error),
    NotCallable { key: String },
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::Parse(err) => write!(f, "invalid descriptor JSON: {err}"),
            JsonError::NotCallable { key } => {
                write!(f, "descriptor key {key:?} needs a callable and cannot come from JSON")
            }
        }
    }
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JsonError::Parse(err) => Some(err),
            JsonError::NotCallable { .. } => None,
        }
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::Parse(err)
    }
}

impl<D: NativeDocument> Descriptor<D> {
    pub fn parse_json(input: &str) -> Result<Self, JsonError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self, JsonError> {
        Ok(match value {
            serde_json::Value::Null => Descriptor::Null,
            serde_json::Value::String(text) => Descriptor::Text(text.clone()),
            serde_json::Value::Array(items) => Descriptor::Array(
                items
                    .iter()
                    .map(Self::from_json)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(map) => Descriptor::Object(object_from_json(map)?),
            scalar => Descriptor::Text(value_from_json(scalar).to_dom_string()),
        })
    }
}

fn object_from_json<D: NativeDocument>(
    map: &Map<String, serde_json::Value>,
) -> Result<ObjectSpec<D>, JsonError> {
    let mut spec = ObjectSpec::new();
    for (key, value) in map {
        spec = match key.as_str() {
            "events" | "init" if value.is_null() => spec,
            "events" | "init" => return Err(JsonError::NotCallable { key: key.clone() }),
            // Content keeps full descriptor semantics so nested objects are
            // checked the same way.
            "content" => spec.content(Descriptor::from_json(value)?),
            "childNodes" => spec.child_nodes(Descriptor::from_json(value)?),
            _ => {
                spec.set(key, value_from_json(value));
                spec
            }
        };
    }
    log::trace!(target: "builder.json", "object descriptor with {} keys", map.len());
    Ok(spec)
}

/// Convert a JSON value to a [`Value`], keeping object key order.
pub fn value_from_json(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => Value::List(items.iter().map(value_from_json).collect()),
        serde_json::Value::Object(map) => Value::Map(
            map.iter()
                .map(|(k, v)| (k.clone(), value_from_json(v)))
                .collect(),
        ),
    }
}
