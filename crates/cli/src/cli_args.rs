//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure of the `fp`
//! binary using the `clap` crate.

use clap::{Parser, ValueEnum};
use flexparams_core::normalize::{ParameterSpec, Shape};

use crate::arguments::{build_parameter_spec, SpecProvider};

/// Output shape selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputShape {
    /// A name-keyed mapping
    #[default]
    Mapping,
    /// A sequence ordered by `--name`
    Sequence,
}

impl From<OutputShape> for Shape {
    fn from(value: OutputShape) -> Self {
        match value {
            OutputShape::Mapping => Shape::Mapping,
            OutputShape::Sequence => Shape::Sequence,
        }
    }
}

/// Command-line arguments for the flexparams CLI tool.
///
/// The raw arguments to normalize follow `--`, or are read from a YAML list
/// with `--input`.
///
/// # Examples
///
/// ```bash
/// # Normalize pairs into a mapping
/// fp -n color -n size -- -color red -size 3
///
/// # Positional values into a sequence
/// fp -n color,size --shape sequence -p -- red 3
///
/// # Dispatch to an operation from ~/.flexparams/operations.yml
/// fp -o greet -- -name World -salutation Hello
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Path to the operation definitions config file YAML.
    ///
    /// If not provided, defaults to `~/.flexparams/operations.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Operation ID to dispatch the normalized arguments to.
    ///
    /// Normalization settings come from the operation's definition and the
    /// rendered template is printed.
    #[arg(long, short = 'o')]
    pub operation: Option<String>,

    /// Read the raw argument list from a YAML file instead of trailing arguments.
    ///
    /// The file should contain a list; its first element may be a mapping.
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Output shape of the normalized parameters.
    #[arg(long, short = 's', value_enum, default_value_t = OutputShape::Mapping)]
    pub shape: OutputShape,

    /// Parameter names in positional order (repeatable or comma separated).
    #[arg(long = "name", short = 'n', action = clap::ArgAction::Append, value_delimiter = ',')]
    pub names: Vec<String>,

    /// Rename a key in the format from=to; an empty `to` drops the key.
    #[arg(long = "rename", short = 'r', action = clap::ArgAction::Append)]
    pub renames: Vec<String>,

    /// Key to collect values trailing a leading mapping under.
    #[arg(long)]
    pub remaining: Option<String>,

    /// Fold named keys to lowercase before renaming.
    #[arg(long, short = 'l', action)]
    pub lowercase: bool,

    /// Treat an ambiguous (even-length, unmarked) argument list as positional.
    #[arg(long, short = 'p', action)]
    pub positional_by_default: bool,

    /// Raw arguments to normalize. Marked keys like `-color` must follow `--`.
    #[arg(trailing_var_arg = true)]
    pub arguments: Vec<String>,
}

impl Args {
    /// Names of the normalization flags that were set on the command line.
    ///
    /// These are ignored when dispatching to an operation, which carries its
    /// own settings.
    #[must_use]
    pub fn normalization_flags(&self) -> Vec<&'static str> {
        [
            ("--shape", self.shape != OutputShape::default()),
            ("--name", !self.names.is_empty()),
            ("--rename", !self.renames.is_empty()),
            ("--remaining", self.remaining.is_some()),
            ("--lowercase", self.lowercase),
            ("--positional-by-default", self.positional_by_default),
        ]
        .into_iter()
        .filter_map(|(flag, set)| set.then_some(flag))
        .collect()
    }
}

impl SpecProvider for Args {
    fn parameter_spec(&self) -> ParameterSpec {
        build_parameter_spec(
            &self.names,
            &self.renames,
            self.remaining.as_deref(),
            self.lowercase,
            self.positional_by_default,
        )
    }
}
