//! Lookup table of operations accepting flexible arguments.
//!
//! Each operation pairs a [`ParameterSpec`] with a handler. Calling an
//! operation normalizes the raw arguments with its spec and hands the resulting
//! mapping to the handler.

use std::fmt::{Debug, Formatter};

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::interpolation::render_mapping;
use crate::normalize::ParameterSpec;
use crate::operation_definitions::OperationDefinition;
use crate::value::{Mapping, Value};

/// Receives the normalized parameters of a call.
pub type Handler = Box<dyn Fn(&Mapping) -> Result<String> + Send + Sync>;

struct Operation {
    spec: ParameterSpec,
    handler: Handler,
}

#[derive(Default)]
pub struct Registry {
    operations: IndexMap<String, Operation>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry whose operations render each definition's template.
    ///
    /// Definitions are expected to be validated already (see
    /// [`crate::file_handling::get_operation_definitions`]); a later
    /// definition with a duplicate ID replaces the earlier one.
    #[must_use]
    pub fn from_definitions(definitions: &[OperationDefinition]) -> Self {
        let mut registry = Self::new();

        for definition in definitions {
            let template = definition.template.clone();
            registry.register(
                definition.id.clone(),
                definition.parameter_spec(),
                move |parameters: &Mapping| render_mapping(&template, parameters),
            );
        }

        registry
    }

    /// Registers `handler` under `id`, replacing any previous operation.
    pub fn register<F>(&mut self, id: impl Into<String>, spec: ParameterSpec, handler: F)
    where
        F: Fn(&Mapping) -> Result<String> + Send + Sync + 'static,
    {
        let id = id.into();
        debug!("Registering operation `{id}`");

        let operation = Operation {
            spec,
            handler: Box::new(handler),
        };

        if self.operations.insert(id.clone(), operation).is_some() {
            debug!("Operation `{id}` replaced an earlier registration");
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.operations.contains_key(id)
    }

    /// Registered IDs in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    #[must_use]
    pub fn spec(&self, id: &str) -> Option<&ParameterSpec> {
        self.operations.get(id).map(|operation| &operation.spec)
    }

    /// Normalizes `source` with the operation's spec and invokes its handler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationNotFound`] for an unknown `id`, or whatever
    /// error the handler returns.
    pub fn call(&self, id: &str, source: &[Value]) -> Result<String> {
        let operation = self
            .operations
            .get(id)
            .ok_or_else(|| Error::OperationNotFound(id.to_string()))?;

        let parameters = operation.spec.to_mapping(source);
        debug!("Calling `{id}` with parameters: {parameters:?}");

        (operation.handler)(&parameters)
    }
}

impl Debug for Registry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Registry")
            .field("operations", &self.operations.keys().collect::<Vec<_>>())
            .finish()
    }
}
