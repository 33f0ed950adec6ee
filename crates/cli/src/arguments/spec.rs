//! Normalization settings taken from the command line.

use flexparams_core::normalize::ParameterSpec;
use log::warn;

/// Trait for objects that can describe how their arguments are normalized.
pub trait SpecProvider {
    /// Returns the [`ParameterSpec`] to normalize raw arguments with.
    fn parameter_spec(&self) -> ParameterSpec;
}

/// Splits a `from=to` rename. Returns `None` (and logs a warning) when there
/// is no `=`; an empty `to` is kept and means "drop this key".
#[must_use]
pub fn parse_rename(rename: &str) -> Option<(String, String)> {
    if let Some((from, to)) = rename.split_once('=') {
        Some((from.to_string(), to.to_string()))
    } else {
        warn!("Ignoring rename `{rename}`, expected the format from=to");
        None
    }
}

/// Builds a [`ParameterSpec`] from command-line values.
///
/// Malformed renames are skipped rather than rejected.
#[must_use]
pub fn build_parameter_spec(
    names: &[String],
    renames: &[String],
    remaining: Option<&str>,
    lowercase: bool,
    positional_by_default: bool,
) -> ParameterSpec {
    ParameterSpec::new(names.to_vec())
        .with_renames(renames.iter().filter_map(|rename| parse_rename(rename)))
        .with_remaining(remaining.unwrap_or_default())
        .with_lowercase(lowercase)
        .with_positional_by_default(positional_by_default)
}
