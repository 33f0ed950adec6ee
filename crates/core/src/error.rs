use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the normalizer: configuration loading, template
/// rendering and operation dispatch. Normalization itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No operations were found in the operation definition YAML. Is `{}` empty?", .path)]
    EmptyOperationDefinition { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing template string: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering template string: {}", .0)]
    Render(#[from] RenderError),

    #[error("No operation is registered with ID `{}`", .0)]
    OperationNotFound(String),

    #[error("Found a non-unique operation ID: `{}`", .0)]
    NonUniqueOperationId(String),

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("Invalid ID `{}`: ID may not contain a colon (reserved for future use)", .0)]
    IdWithColon(String),

    #[error("Invalid ID `{}`: ID cannot be purely numeric", .0)]
    NumericId(String),
}

impl Error {
    pub fn empty_operation_definition(path: String) -> Self {
        Self::EmptyOperationDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
