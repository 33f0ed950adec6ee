//! Flexparams Core Library
//!
//! This crate lets a function accept its arguments in several informal shapes
//! (positional values, `-name value` pairs, or a mapping of names followed by
//! trailing values) while working against one canonical representation.
//!
//! # Key Features
//!
//! - **Normalization**: Classify, canonicalize and reshape raw argument lists
//! - **Operation Registry**: Dispatch normalized arguments to named handlers
//! - **Operation Definitions**: Load templated operations from YAML
//! - **Error Handling**: Error types for everything around the (infallible) normalizer
//!
//! # Examples
//!
//! ```
//! use flexparams_core::normalize::ParameterSpec;
//! use flexparams_core::value::Value;
//!
//! let spec = ParameterSpec::new(["a", "rest"]).with_remaining("rest");
//! let source = [
//!     Value::mapping([("-a", Value::from(1_i64))]),
//!     Value::from("x"),
//!     Value::from("y"),
//! ];
//!
//! let parameters = spec.to_mapping(&source);
//! assert_eq!(parameters["a"], Value::from(1_i64));
//! assert_eq!(parameters["rest"], Value::sequence(["x", "y"]));
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod interpolation;
pub mod normalize;
pub mod operation_definitions;
pub mod registry;
pub mod value;
