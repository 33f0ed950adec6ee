//! Configuration path utilities for flexparams.
//!
//! This module resolves the operation definition file path, expanding shell
//! shorthands like `~`.

/// Default path for the operation definitions file
const DEFAULT_CONFIG_PATH: &str = "~/.flexparams/operations.yml";

/// Resolves the operation definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use flexparams_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(None);
///
/// // Use custom path
/// let custom_path = get_config_path(Some("/path/to/operations.yml"));
/// assert_eq!(custom_path, "/path/to/operations.yml");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    let config_path = config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let result = get_config_path(Some("/custom/path/operations.yml"));
        assert_eq!(result, "/custom/path/operations.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".flexparams/operations.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let result = get_config_path(Some("~/my-operations.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-operations.yml"));
    }
}
