use flexparams_core::error::Result;
use flexparams_core::file_handling::get_raw_input;
use flexparams_core::value::Value;
use log::{debug, warn};

/// Collects the raw argument list to normalize.
///
/// Reads the YAML list at `input_path` when given, otherwise turns each
/// trailing command-line argument into a text value. Trailing arguments are
/// ignored when an input file is used.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or is not valid YAML.
pub fn process_command_line(input_path: Option<&str>, arguments: &[String]) -> Result<Vec<Value>> {
    let Some(input_path) = input_path else {
        return Ok(arguments.iter().map(|argument| Value::from(argument.as_str())).collect());
    };

    if !arguments.is_empty() {
        warn!(
            "Reading arguments from `{input_path}`, ignoring {} trailing argument(s)",
            arguments.len()
        );
    }

    let input_path = shellexpand::tilde(input_path);
    debug!("Input path: `{input_path}`");

    get_raw_input(&input_path)
}
