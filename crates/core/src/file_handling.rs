//! File handling and validation for flexparams configuration.
//!
//! This module reads operation definitions and raw argument lists from YAML
//! files, and validates operation IDs and templates.

use std::collections::HashSet;
use std::fs::File;

use leon::Template;

use crate::error::Error::{EmptyId, IdWithColon, IdWithSpace, NonUniqueOperationId, NumericId};
use crate::error::{Error, Result};
use crate::operation_definitions::OperationDefinition;
use crate::value::{raw_input_from_value, Value};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(' ') {
        return Err(IdWithSpace(id.to_string()));
    }

    if id.contains(':') {
        return Err(IdWithColon(id.to_string()));
    }

    if id.chars().all(|c| c.is_numeric()) {
        return Err(NumericId(id.to_string()));
    }

    Ok(())
}

fn validate_operations(operations: &[OperationDefinition]) -> Result<()> {
    let mut ids = HashSet::new();

    for operation in operations {
        validate_id(&operation.id)?;

        if !ids.insert(operation.id.clone()) {
            // Found a duplicate ID
            return Err(NonUniqueOperationId(operation.id.clone()));
        }

        Template::parse(&operation.template)?;
    }

    Ok(())
}

/// Loads and validates operation definitions from a configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The configuration file is empty
/// - Operation IDs are invalid or non-unique
/// - A template does not parse
///
/// # Examples
///
/// ```no_run
/// use flexparams_core::file_handling::get_operation_definitions;
///
/// let operations = get_operation_definitions("~/.flexparams/operations.yml")?;
/// println!("Loaded {} operations", operations.len());
/// # Ok::<(), flexparams_core::error::Error>(())
/// ```
pub fn get_operation_definitions(config_path: &str) -> Result<Vec<OperationDefinition>> {
    let config_reader = get_reader("config", config_path)?;

    let parsed_operations: Vec<OperationDefinition> = serde_yaml::from_reader(config_reader)
        .map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "config".to_string(),
                config_path.to_string(),
                e,
            )
        })?;

    if parsed_operations.is_empty() {
        return Err(Error::empty_operation_definition(config_path.to_string()));
    }

    validate_operations(&parsed_operations)?;

    Ok(parsed_operations)
}

/// Reads a raw argument list from a YAML file.
///
/// A document that is not a sequence yields an empty argument list.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid YAML.
pub fn get_raw_input(input_path: &str) -> Result<Vec<Value>> {
    let input_reader = get_reader("input", input_path)?;

    let document: Value = serde_yaml::from_reader(input_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "input".to_string(),
            input_path.to_string(),
            e,
        )
    })?;

    Ok(raw_input_from_value(document))
}
