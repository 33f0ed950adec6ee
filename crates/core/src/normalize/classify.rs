//! Format classification of a raw argument list.
//!
//! Classification happens once per call. The result borrows the parts of the
//! argument list each later stage needs, so no stage re-inspects the input.

use log::debug;

use crate::normalize::MARKER;
use crate::value::{Mapping, Value};

/// How a raw argument list was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format<'a> {
    /// Values identified by position only.
    Positional(&'a [Value]),
    /// One mapping of named parameters, followed by any remaining values.
    NamedFromMapping {
        named: &'a Mapping,
        remaining: &'a [Value],
    },
    /// Alternating name/value pairs.
    NamedFromPairs(&'a [Value]),
}

impl Format<'_> {
    #[must_use]
    pub fn is_positional(&self) -> bool {
        matches!(self, Format::Positional(_))
    }
}

/// Decides whether `source` holds positional or named arguments.
///
/// Returns `None` for an empty argument list. Otherwise, in priority order:
/// a leading mapping means named, a leading scalar whose text starts with the
/// `-` marker means named pairs, an odd count means positional, and an even
/// count is ambiguous and falls back to `positional_by_default`.
#[must_use]
pub fn classify(source: &[Value], positional_by_default: bool) -> Option<Format<'_>> {
    let first = source.first()?;

    let format = if let Value::Mapping(named) = first {
        Format::NamedFromMapping {
            named,
            remaining: &source[1..],
        }
    } else if has_marker(first) {
        Format::NamedFromPairs(source)
    } else if source.len() % 2 == 1 || positional_by_default {
        Format::Positional(source)
    } else {
        Format::NamedFromPairs(source)
    };

    debug!(
        "Classified {} argument(s) as {}",
        source.len(),
        match format {
            Format::Positional(_) => "positional",
            Format::NamedFromMapping { .. } => "named (mapping)",
            Format::NamedFromPairs(_) => "named (pairs)",
        }
    );

    Some(format)
}

fn has_marker(value: &Value) -> bool {
    value
        .as_scalar()
        .is_some_and(|scalar| scalar.to_string().starts_with(MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<Value> {
        values.iter().map(|value| Value::from(*value)).collect()
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(&[], true), None);
        assert_eq!(classify(&[], false), None);
    }

    #[test]
    fn test_classify_leading_mapping() {
        let source = vec![
            Value::mapping([("-a", Value::from(1_i64))]),
            Value::from("x"),
        ];
        match classify(&source, true).unwrap() {
            Format::NamedFromMapping { named, remaining } => {
                assert_eq!(named.len(), 1);
                assert_eq!(remaining, &[Value::from("x")]);
            }
            other => panic!("Expected NamedFromMapping, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_marker_wins_over_odd_count() {
        let source = texts(&["-color", "red", "extra"]);
        assert!(matches!(
            classify(&source, true),
            Some(Format::NamedFromPairs(_))
        ));
    }

    #[test]
    fn test_classify_negative_number_counts_as_marker() {
        let source = vec![Value::from(-5_i64), Value::from(3_i64)];
        assert!(matches!(
            classify(&source, true),
            Some(Format::NamedFromPairs(_))
        ));
    }

    #[test]
    fn test_classify_sequence_first_is_never_marked() {
        let source = vec![Value::sequence(["-a", "b"]), Value::from("c")];
        assert!(matches!(
            classify(&source, false),
            Some(Format::NamedFromPairs(_))
        ));
        assert!(classify(&source, true).unwrap().is_positional());
    }

    #[test]
    fn test_classify_odd_count_is_positional() {
        let source = texts(&["a", "b", "c"]);
        assert!(classify(&source, false).unwrap().is_positional());
        assert!(classify(&source, true).unwrap().is_positional());
    }

    #[test]
    fn test_classify_even_count_uses_default_guess() {
        let source = texts(&["a", "b", "c", "d"]);
        assert!(classify(&source, true).unwrap().is_positional());
        assert!(matches!(
            classify(&source, false),
            Some(Format::NamedFromPairs(_))
        ));
    }
}
