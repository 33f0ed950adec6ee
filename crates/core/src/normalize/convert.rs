//! Conversion of classified arguments into the requested output shape.

use log::warn;

use crate::normalize::NameList;
use crate::value::{Mapping, Value};

/// Assigns positional values to names by index.
///
/// Values beyond the end of `names` are dropped.
#[must_use]
pub fn positional_to_mapping(source: &[Value], names: &NameList) -> Mapping {
    if source.len() > names.len() {
        warn!(
            "Dropping {} positional value(s) beyond the {} known name(s)",
            source.len() - names.len(),
            names.len()
        );
    }

    let mut mapping: Mapping = names
        .iter()
        .zip(source)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    mapping.shift_remove("");
    mapping
}

/// Positional input in positional output is returned unchanged.
#[must_use]
pub fn positional_to_sequence(source: &[Value]) -> Vec<Value> {
    source.to_vec()
}

/// Orders canonical parameters by `names`; missing names yield null slots.
#[must_use]
pub fn canonical_to_sequence(canonical: &Mapping, names: &NameList) -> Vec<Value> {
    names
        .iter()
        .map(|name| canonical.get(name).cloned().unwrap_or_default())
        .collect()
}

#[must_use]
pub fn canonical_to_mapping(mut canonical: Mapping) -> Mapping {
    canonical.shift_remove("");
    canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<Value> {
        values.iter().map(|value| Value::from(*value)).collect()
    }

    #[test]
    fn test_positional_to_mapping() {
        let names = NameList::from(["x", "y", "z"]);
        let mapping = positional_to_mapping(&texts(&["a", "b", "c"]), &names);

        assert_eq!(
            mapping.into_iter().collect::<Vec<_>>(),
            vec![
                ("x".to_string(), Value::from("a")),
                ("y".to_string(), Value::from("b")),
                ("z".to_string(), Value::from("c")),
            ]
        );
    }

    #[test]
    fn test_positional_to_mapping_short_name_list() {
        let names = NameList::from(["x"]);
        let mapping = positional_to_mapping(&texts(&["a", "b", "c"]), &names);

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("x"), Some(&Value::from("a")));
    }

    #[test]
    fn test_positional_to_mapping_long_name_list() {
        let names = NameList::from(["x", "y", "z"]);
        let mapping = positional_to_mapping(&texts(&["a"]), &names);

        assert_eq!(mapping.len(), 1);
        assert!(!mapping.contains_key("y"));
    }

    #[test]
    fn test_positional_to_mapping_drops_empty_name() {
        let names = NameList::from(["", "y"]);
        let mapping = positional_to_mapping(&texts(&["a", "b", "c"]), &names);

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("y"), Some(&Value::from("b")));
    }

    #[test]
    fn test_positional_to_sequence_is_identity() {
        let source = vec![Value::from("a"), Value::sequence(["b"]), Value::from(3_i64)];
        assert_eq!(positional_to_sequence(&source), source);
    }

    #[test]
    fn test_canonical_to_sequence_fills_missing_with_null() {
        let mut canonical = Mapping::new();
        canonical.insert("b".to_string(), Value::from(2_i64));
        canonical.insert("unused".to_string(), Value::from(9_i64));

        let names = NameList::from(["a", "b"]);
        assert_eq!(
            canonical_to_sequence(&canonical, &names),
            vec![Value::NULL, Value::from(2_i64)]
        );
    }

    #[test]
    fn test_canonical_to_mapping_removes_empty_key() {
        let mut canonical = Mapping::new();
        canonical.insert(String::new(), Value::from(1_i64));
        canonical.insert("a".to_string(), Value::from(2_i64));

        let mapping = canonical_to_mapping(canonical);
        assert_eq!(mapping.len(), 1);
        assert!(!mapping.contains_key(""));
    }
}
