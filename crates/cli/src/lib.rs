//! Flexparams CLI Library
//!
//! This crate provides the command-line interface for flexparams. It collects a
//! raw argument list (trailing arguments or a YAML file), normalizes it and
//! either prints the result or dispatches it to an operation defined in YAML.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`arguments`]: Raw argument collection and normalization settings
//! - [`output`]: YAML rendering of normalized parameters
//!
//! # Examples
//!
//! ```bash
//! # Name/value pairs into a mapping
//! fp -n color,size -- -color red -size 3
//!
//! # A mapping followed by remaining values, from a file
//! fp -n a,rest --remaining rest --shape sequence -i args.yml
//!
//! # Dispatch to an operation
//! fp -o greet -- -name World -salutation Hello
//! ```

pub mod arguments;
pub mod cli_args;
pub mod output;
