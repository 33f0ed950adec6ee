//! Argument values handled by the normalizer.
//!
//! Callers hand the normalizer a slice of [`Value`]s. A value is either a
//! [`Scalar`], a sequence of values or a mapping of names to values. The
//! normalizer only ever inspects the *first* argument's shape; everything else
//! is carried through untouched.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// Name-keyed parameters, in insertion order.
pub type Mapping = IndexMap<String, Value>;

/// A single non-composite argument value.
///
/// `Null` stands for an undefined slot, e.g. a name with no matching
/// parameter or a dangling key at the end of a pair list.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Display for Scalar {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(value) => write!(formatter, "{value}"),
            Scalar::Integer(value) => write!(formatter, "{value}"),
            Scalar::Float(value) => write!(formatter, "{value}"),
            Scalar::Text(value) => formatter.write_str(value),
        }
    }
}

/// An argument as received by a flexible-signature function.
///
/// Deserializing goes through [`serde_yaml::Value`], so mapping keys that are
/// not text (`1:`, `-1:`, `true:`) are kept under their textual form.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// The undefined value.
    pub const NULL: Value = Value::Scalar(Scalar::Null);

    /// Builds a mapping value from `(name, value)` entries, keeping their order.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Builds a sequence value from anything convertible into values.
    pub fn sequence<T, I>(items: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::NULL
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_yaml::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Value::NULL,
            serde_yaml::Value::Bool(value) => Value::from(value),
            serde_yaml::Value::Number(number) => match number.as_i64() {
                Some(integer) => Value::from(integer),
                None => number.as_f64().map_or(Value::NULL, Value::from),
            },
            serde_yaml::Value::String(text) => Value::from(text),
            serde_yaml::Value::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (Value::from(key).to_string(), Value::from(value)))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

/// Textual form of a value.
///
/// Scalars render as their plain text, sequences join their items with a
/// single space and mappings render as space separated `key=value` pairs.
impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(scalar) => write!(formatter, "{scalar}"),
            Value::Sequence(items) => write!(formatter, "{}", items.iter().join(" ")),
            Value::Mapping(mapping) => write!(
                formatter,
                "{}",
                mapping
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .join(" ")
            ),
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::Text(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::Text(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Integer(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

/// Turns a loosely typed document into a raw argument list.
///
/// Only a sequence is a valid argument list; anything else is treated as an
/// empty one. A null document (e.g. an empty YAML file) is silently empty.
#[must_use]
pub fn raw_input_from_value(value: Value) -> Vec<Value> {
    match value {
        Value::Sequence(items) => items,
        Value::Scalar(Scalar::Null) => Vec::new(),
        other => {
            warn!("Argument list is not a sequence, treating it as empty: {other:?}");
            Vec::new()
        }
    }
}
