//! # Raw Input Values
//!
//! `RawValue` is the untyped tree a validator receives. It deliberately
//! keeps two associative shapes apart:
//!
//! - [`RawValue::Record`] — a plain attribute record with string keys, as
//!   produced by JSON objects or YAML mappings whose keys are all strings.
//!   Keys keep their order from the source document.
//! - [`RawValue::Map`] — a native associative container whose keys may be
//!   any value (YAML `1: x`, or entries assembled programmatically). Entry
//!   order is preserved and duplicate raw keys are legal.
//!
//! Loading configuration files is not this crate's concern; values are
//! built from whatever the caller already parsed, either through
//! `From<serde_json::Value>` or by deserializing straight into `RawValue`.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Number;

use crate::error::ValueConversionError;

/// An untyped input value of unknown shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<RawValue>),
    /// Plain attribute record; iterates in document order.
    Record(IndexMap<String, RawValue>),
    /// Native associative container; iterates in insertion order.
    Map(Vec<(RawValue, RawValue)>),
}

impl RawValue {
    /// Build a plain record in the given key order. A later duplicate key
    /// overwrites the earlier value but keeps its position.
    pub fn record<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RawValue)>,
    {
        Self::Record(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a native associative container, keeping every entry in order.
    pub fn map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RawValue, RawValue)>,
    {
        Self::Map(entries.into_iter().collect())
    }

    /// Build a number, rejecting NaN and infinities.
    pub fn from_f64(f: f64) -> Result<Self, ValueConversionError> {
        Number::from_f64(f)
            .map(Self::Number)
            .ok_or(ValueConversionError::NonFiniteNumber(f))
    }

    /// Diagnostic name of this value's kind, used only in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "Array",
            Self::Record(_) => "Object",
            Self::Map(_) => "Map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// String form of a value.
///
/// Strings render verbatim, scalars as literals, and composites in a
/// compact JSON-like form. Used to derive a context segment from a raw key.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Record(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("}")
            }
            Self::Map(entries) => {
                f.write_str("Map{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{k}=>{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Record(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for RawValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

/// Non-finite floats become `Null`, matching `serde_json::Value`.
/// Use [`RawValue::from_f64`] to reject them instead.
impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        Self::from_f64(f).unwrap_or(Self::Null)
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any configuration value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        RawValue::from_f64(v).map_err(E::custom)
    }

    fn visit_str<E>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_string<E>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::String(v))
    }

    fn visit_none<E>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_unit<E>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<RawValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RawValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(RawValue::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<RawValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(RawValue, RawValue)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }

        // String-keyed mappings are plain records; anything else keeps its
        // raw keys as a native associative container.
        if entries.iter().all(|(k, _)| matches!(k, RawValue::String(_))) {
            let record = entries
                .into_iter()
                .filter_map(|(k, v)| match k {
                    RawValue::String(k) => Some((k, v)),
                    _ => None,
                })
                .collect();
            Ok(RawValue::Record(record))
        } else {
            Ok(RawValue::Map(entries))
        }
    }
}
