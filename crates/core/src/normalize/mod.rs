//! Parameter-list normalization.
//!
//! A flexible-signature function may be called in several informal ways:
//!
//! - **Positional**: `["red", 3]`
//! - **Name/value pairs**: `["-color", "red", "-size", 3]`
//! - **A mapping**, optionally followed by remaining values:
//!   `[{"-color": "red"}, "extra", "values"]`
//!
//! The normalizer converts whichever shape was supplied into the single shape
//! the function wants to work with: a name-keyed [`Mapping`] or a
//! positionally-ordered sequence. It runs four stages per call, none of which
//! can fail:
//!
//! 1. [`classify()`] decides the input format.
//! 2. [`KeyCanonicalizer`] rewrites named keys (marker stripping, case folding,
//!    renaming, deletion).
//! 3. [`collect_remaining`] gathers values trailing a leading mapping.
//! 4. The [`convert`] functions produce the requested shape.
//!
//! Malformed or ambiguous input never produces an error. Ambiguity resolves
//! through [`ParameterSpec::with_positional_by_default`], excess positional
//! values beyond the name list are dropped, and duplicate aliases overwrite
//! one another. Which of several keys aliasing the same output key wins is
//! unspecified; callers should not rely on it.
//!
//! # Examples
//!
//! ```
//! use flexparams_core::normalize::{normalize_to_mapping, ParameterSpec};
//! use flexparams_core::value::Value;
//!
//! let spec = ParameterSpec::new(["color", "size"])
//!     .with_rename("colour", "color")
//!     .with_positional_by_default(true);
//!
//! let positional = normalize_to_mapping(&[Value::from("red"), Value::from(3_i64)], &spec);
//! let named = normalize_to_mapping(
//!     &[Value::from("-colour"), Value::from("red"), Value::from("-size"), Value::from(3_i64)],
//!     &spec,
//! );
//! assert_eq!(positional, named);
//! ```

pub mod canonicalize;
pub mod classify;
pub mod convert;
pub mod remaining;

use std::collections::HashMap;

use serde::Serialize;

pub use canonicalize::KeyCanonicalizer;
pub use classify::{classify, Format};
pub use remaining::collect_remaining;

use crate::value::{Mapping, Value};

/// Leading character that marks a named key.
pub const MARKER: char = '-';

/// Ordered parameter names bridging positions and names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList(Vec<String>);

impl NameList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for NameList {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for NameList {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl<S: Into<String>> From<Vec<S>> for NameList {
    fn from(names: Vec<S>) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for NameList {
    fn from(names: [S; N]) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How a function wants its parameters normalized.
///
/// Defaults: no names, no renames, an empty remaining name (remaining values
/// are discarded), no case folding, and ambiguous input guessed as named.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSpec {
    names: NameList,
    rename: HashMap<String, String>,
    remaining_name: String,
    lowercase: bool,
    positional_by_default: bool,
}

impl ParameterSpec {
    /// Creates a spec for the given parameter names (a single name or a list).
    pub fn new(names: impl Into<NameList>) -> Self {
        Self {
            names: names.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_names(mut self, names: impl Into<NameList>) -> Self {
        self.names = names.into();
        self
    }

    /// Renames the (marker-stripped, possibly folded) key `from` to `to`.
    /// An empty `to` drops the parameter.
    #[must_use]
    pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rename.insert(from.into(), to.into());
        self
    }

    #[must_use]
    pub fn with_renames<K, V, I>(mut self, renames: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.rename.extend(
            renames
                .into_iter()
                .map(|(from, to)| (from.into(), to.into())),
        );
        self
    }

    /// Sets the key under which values trailing a leading mapping are stored.
    #[must_use]
    pub fn with_remaining(mut self, remaining_name: impl Into<String>) -> Self {
        self.remaining_name = remaining_name.into();
        self
    }

    /// Folds named keys to lowercase before rename lookup.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Tie-breaker for an even-length list with no marker and no mapping.
    #[must_use]
    pub fn with_positional_by_default(mut self, positional_by_default: bool) -> Self {
        self.positional_by_default = positional_by_default;
        self
    }

    #[must_use]
    pub fn names(&self) -> &NameList {
        &self.names
    }

    #[must_use]
    pub fn renames(&self) -> &HashMap<String, String> {
        &self.rename
    }

    #[must_use]
    pub fn remaining_name(&self) -> &str {
        &self.remaining_name
    }

    #[must_use]
    pub fn lowercases_keys(&self) -> bool {
        self.lowercase
    }

    #[must_use]
    pub fn guesses_positional(&self) -> bool {
        self.positional_by_default
    }

    #[must_use]
    pub fn to_mapping(&self, source: &[Value]) -> Mapping {
        normalize_to_mapping(source, self)
    }

    #[must_use]
    pub fn to_sequence(&self, source: &[Value]) -> Vec<Value> {
        normalize_to_sequence(source, self)
    }
}

/// Requested output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Mapping,
    Sequence,
}

/// Normalized parameters in the requested [`Shape`].
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Normalized {
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

impl Normalized {
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Normalized::Mapping(_) => Shape::Mapping,
            Normalized::Sequence(_) => Shape::Sequence,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Normalized::Mapping(mapping) => mapping.is_empty(),
            Normalized::Sequence(values) => values.is_empty(),
        }
    }
}

// Pivot between classification and output conversion.
enum Intermediate<'a> {
    Empty,
    Positional(&'a [Value]),
    Canonical(Mapping),
}

fn prepare<'a>(source: &'a [Value], spec: &ParameterSpec) -> Intermediate<'a> {
    let Some(format) = classify(source, spec.positional_by_default) else {
        return Intermediate::Empty;
    };

    let canonicalizer = KeyCanonicalizer::new(&spec.rename, spec.lowercase);

    match format {
        Format::Positional(values) => Intermediate::Positional(values),
        Format::NamedFromPairs(pairs) => {
            Intermediate::Canonical(canonicalizer.canonicalize_pairs(pairs))
        }
        Format::NamedFromMapping { named, remaining } => {
            let mut canonical = canonicalizer.canonicalize_mapping(named);
            collect_remaining(remaining, &spec.remaining_name, &mut canonical);
            Intermediate::Canonical(canonical)
        }
    }
}

/// Normalizes `source` into a name-keyed mapping.
#[must_use]
pub fn normalize_to_mapping(source: &[Value], spec: &ParameterSpec) -> Mapping {
    match prepare(source, spec) {
        Intermediate::Empty => Mapping::new(),
        Intermediate::Positional(values) => convert::positional_to_mapping(values, &spec.names),
        Intermediate::Canonical(canonical) => convert::canonical_to_mapping(canonical),
    }
}

/// Normalizes `source` into a sequence ordered by the spec's names.
#[must_use]
pub fn normalize_to_sequence(source: &[Value], spec: &ParameterSpec) -> Vec<Value> {
    match prepare(source, spec) {
        Intermediate::Empty => Vec::new(),
        Intermediate::Positional(values) => convert::positional_to_sequence(values),
        Intermediate::Canonical(canonical) => {
            convert::canonical_to_sequence(&canonical, &spec.names)
        }
    }
}

/// Normalizes `source` into the given `shape`.
#[must_use]
pub fn normalize(source: &[Value], spec: &ParameterSpec, shape: Shape) -> Normalized {
    match shape {
        Shape::Mapping => Normalized::Mapping(normalize_to_mapping(source, spec)),
        Shape::Sequence => Normalized::Sequence(normalize_to_sequence(source, spec)),
    }
}
