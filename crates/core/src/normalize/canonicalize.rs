//! Key canonicalization for named arguments.

use std::collections::HashMap;

use log::trace;

use crate::normalize::MARKER;
use crate::value::{Mapping, Value};

/// Rewrites named-argument keys into output keys.
///
/// A key loses one leading marker, is optionally folded to lowercase and is
/// then looked up in the rename table. Rename targets, names and the remaining
/// name are never folded; callers that enable folding supply them lowercased.
#[derive(Debug, Clone, Copy)]
pub struct KeyCanonicalizer<'a> {
    rename: &'a HashMap<String, String>,
    lowercase: bool,
}

impl<'a> KeyCanonicalizer<'a> {
    #[must_use]
    pub fn new(rename: &'a HashMap<String, String>, lowercase: bool) -> Self {
        Self { rename, lowercase }
    }

    /// Returns the output key for `raw_key`, or `None` when the parameter is
    /// to be discarded (renamed to the empty string, or empty after stripping).
    #[must_use]
    pub fn canonical_key(&self, raw_key: &str) -> Option<String> {
        let stripped = raw_key.strip_prefix(MARKER).unwrap_or(raw_key);
        let folded = if self.lowercase {
            stripped.to_lowercase()
        } else {
            stripped.to_string()
        };

        let key = match self.rename.get(&folded) {
            Some(target) => target.clone(),
            None => folded,
        };

        trace!("Canonicalized key `{raw_key}` to `{key}`");

        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }

    /// Canonicalizes the keys of a named-parameter mapping.
    #[must_use]
    pub fn canonicalize_mapping(&self, named: &Mapping) -> Mapping {
        let mut canonical = Mapping::with_capacity(named.len());
        for (key, value) in named {
            self.insert(&mut canonical, key, value.clone());
        }
        canonical
    }

    /// Canonicalizes alternating key/value pairs.
    ///
    /// A dangling key at the end of an odd-length list gets a null value.
    #[must_use]
    pub fn canonicalize_pairs(&self, pairs: &[Value]) -> Mapping {
        let mut canonical = Mapping::with_capacity(pairs.len() / 2 + 1);
        for pair in pairs.chunks(2) {
            let key = pair[0].to_string();
            let value = pair.get(1).cloned().unwrap_or_default();
            self.insert(&mut canonical, &key, value);
        }
        canonical
    }

    // Later entries overwrite earlier ones that canonicalize to the same key.
    fn insert(&self, canonical: &mut Mapping, raw_key: &str, value: Value) {
        if let Some(key) = self.canonical_key(raw_key) {
            canonical.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rename(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
            .collect()
    }

    #[test]
    fn test_marker_is_stripped_once() {
        let table = HashMap::new();
        let canonicalizer = KeyCanonicalizer::new(&table, false);

        assert_eq!(canonicalizer.canonical_key("-color"), Some("color".to_string()));
        assert_eq!(canonicalizer.canonical_key("color"), Some("color".to_string()));
        assert_eq!(canonicalizer.canonical_key("--color"), Some("-color".to_string()));
    }

    #[test]
    fn test_lowercase_happens_before_rename() {
        let table = rename(&[("color", "hue")]);

        let folding = KeyCanonicalizer::new(&table, true);
        assert_eq!(folding.canonical_key("-Color"), Some("hue".to_string()));

        let preserving = KeyCanonicalizer::new(&table, false);
        assert_eq!(preserving.canonical_key("-Color"), Some("Color".to_string()));
    }

    #[test]
    fn test_rename_tables_are_not_folded() {
        let table = rename(&[("Color", "hue")]);
        let canonicalizer = KeyCanonicalizer::new(&table, true);

        assert_eq!(canonicalizer.canonical_key("-Color"), Some("color".to_string()));
    }

    #[test]
    fn test_empty_targets_are_dropped() {
        let table = rename(&[("debug", "")]);
        let canonicalizer = KeyCanonicalizer::new(&table, false);

        assert_eq!(canonicalizer.canonical_key("-debug"), None);
        assert_eq!(canonicalizer.canonical_key("-"), None);
        assert_eq!(canonicalizer.canonical_key(""), None);
    }

    #[test]
    fn test_canonicalize_mapping() {
        let table = rename(&[("colour", "color"), ("debug", "")]);
        let canonicalizer = KeyCanonicalizer::new(&table, false);

        let named: Mapping = [
            ("-colour".to_string(), Value::from("red")),
            ("-debug".to_string(), Value::from(true)),
            ("size".to_string(), Value::sequence([1_i64, 2])),
        ]
        .into_iter()
        .collect();

        let canonical = canonicalizer.canonicalize_mapping(&named);
        assert_eq!(canonical.len(), 2);
        assert_eq!(canonical.get("color"), Some(&Value::from("red")));
        assert_eq!(canonical.get("size"), Some(&Value::sequence([1_i64, 2])));
        assert!(!canonical.contains_key("debug"));
    }

    #[test]
    fn test_canonicalize_pairs_with_dangling_key() {
        let table = HashMap::new();
        let canonicalizer = KeyCanonicalizer::new(&table, false);

        let pairs = vec![Value::from("-a"), Value::from(1_i64), Value::from("-b")];
        let canonical = canonicalizer.canonicalize_pairs(&pairs);

        assert_eq!(canonical.get("a"), Some(&Value::from(1_i64)));
        assert_eq!(canonical.get("b"), Some(&Value::NULL));
    }

    #[test]
    fn test_duplicate_aliases_overwrite() {
        let table = rename(&[("colour", "color")]);
        let canonicalizer = KeyCanonicalizer::new(&table, false);

        let pairs = vec![
            Value::from("-color"),
            Value::from("red"),
            Value::from("-colour"),
            Value::from("blue"),
        ];
        let canonical = canonicalizer.canonicalize_pairs(&pairs);

        assert_eq!(canonical.len(), 1);
        assert_eq!(canonical.get("color"), Some(&Value::from("blue")));
    }
}
