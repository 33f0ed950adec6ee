//! Rendering of normalized parameters for the terminal.

use flexparams_core::error::{Error, Result};
use flexparams_core::normalize::Normalized;

/// Renders normalized parameters as a YAML document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_yaml(normalized: &Normalized) -> Result<String> {
    serde_yaml::to_string(normalized).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "output".to_string(),
            "<stdout>".to_string(),
            e,
        )
    })
}
