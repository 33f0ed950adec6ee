use std::collections::HashMap;

use leon::Template;

use crate::error::Result;
use crate::value::Mapping;

/// Builds a template context from normalized parameters, using each value's
/// textual form.
#[must_use]
pub fn build_context(parameters: &Mapping) -> HashMap<String, String> {
    parameters
        .iter()
        .map(|(name, value)| (name.clone(), value.to_string()))
        .collect()
}

/// Renders `template` with the normalized `parameters`.
///
/// # Errors
///
/// Returns an error if the template does not parse or refers to a parameter
/// that is not present.
pub fn render_mapping(template: &str, parameters: &Mapping) -> Result<String> {
    let template = Template::parse(template)?;
    let context = build_context(parameters);

    Ok(template.render(&context)?)
}
