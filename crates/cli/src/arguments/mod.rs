//! Raw argument collection and normalization settings for the flexparams CLI.
//!
//! Raw arguments can be provided in two ways:
//! - **Trailing arguments**: Each one becomes a text value (`fp -- -color red`)
//! - **Input file**: A YAML list, which may start with a mapping (`fp -i args.yml`)
//!
//! Normalization settings come from `--name`, `--rename`, `--remaining`,
//! `--lowercase` and `--positional-by-default`.

pub mod processing;
pub mod spec;

// Re-exports for convenience
pub use processing::process_command_line;
pub use spec::build_parameter_spec;
pub use spec::parse_rename;
pub use spec::SpecProvider;
