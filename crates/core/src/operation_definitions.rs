use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use log::warn;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value as YamlValue;

use crate::normalize::{NameList, ParameterSpec};

/// An operation loaded from the operation definitions YAML.
///
/// ```yaml
/// - id: greet
///   description: Greet someone
///   names: [name, greeting]
///   rename: { salutation: greeting, debug: "" }
///   template: "{greeting}, {name}!"
/// ```
///
/// The parameter fields are read leniently: a field of the wrong type is
/// replaced with its empty default (and a warning is logged) instead of
/// failing the whole file.
#[derive(Deserialize, Debug, Clone)]
pub struct OperationDefinition {
    pub id: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_names")]
    pub names: NameList,
    #[serde(default, deserialize_with = "lenient_rename")]
    pub rename: HashMap<String, String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub remaining: String,
    #[serde(default)]
    pub lowercase: bool,
    #[serde(default)]
    pub positional_by_default: bool,
    pub template: String,
}

impl OperationDefinition {
    /// The normalization settings this operation accepts its arguments with.
    #[must_use]
    pub fn parameter_spec(&self) -> ParameterSpec {
        ParameterSpec::new(self.names.clone())
            .with_renames(self.rename.clone())
            .with_remaining(self.remaining.clone())
            .with_lowercase(self.lowercase)
            .with_positional_by_default(self.positional_by_default)
    }
}

impl Display for OperationDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.id)?;

        if let Some(desc) = &self.description {
            write!(formatter, " ({desc})")?;
        }

        Ok(())
    }
}

fn yaml_text(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(text) => Some(text.clone()),
        YamlValue::Number(number) => Some(number.to_string()),
        YamlValue::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn coerce_names(raw: &YamlValue) -> NameList {
    match raw {
        YamlValue::Null => NameList::default(),
        YamlValue::Sequence(items) => items
            .iter()
            .filter_map(|item| {
                let name = yaml_text(item);
                if name.is_none() {
                    warn!("Ignoring non-text entry in `names`: {item:?}");
                }
                name
            })
            .collect(),
        other => match yaml_text(other) {
            Some(name) => NameList::from(name),
            None => {
                warn!("`names` should be a name or a list of names, ignoring: {other:?}");
                NameList::default()
            }
        },
    }
}

fn coerce_rename(raw: &YamlValue) -> HashMap<String, String> {
    match raw {
        YamlValue::Null => HashMap::new(),
        YamlValue::Mapping(entries) => entries
            .iter()
            .filter_map(|(from, to)| {
                let target = match to {
                    YamlValue::Null => Some(String::new()),
                    other => yaml_text(other),
                };
                if let (Some(key), Some(target)) = (yaml_text(from), target) {
                    Some((key, target))
                } else {
                    warn!("Ignoring malformed `rename` entry: {from:?} -> {to:?}");
                    None
                }
            })
            .collect(),
        other => {
            warn!("`rename` should be a mapping, ignoring: {other:?}");
            HashMap::new()
        }
    }
}

fn coerce_text(raw: &YamlValue) -> String {
    match raw {
        YamlValue::Null => String::new(),
        other => yaml_text(other).unwrap_or_else(|| {
            warn!("Expected a text value, ignoring: {other:?}");
            String::new()
        }),
    }
}

fn lenient_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NameList, D::Error> {
    YamlValue::deserialize(deserializer).map(|raw| coerce_names(&raw))
}

fn lenient_rename<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<HashMap<String, String>, D::Error> {
    YamlValue::deserialize(deserializer).map(|raw| coerce_rename(&raw))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    YamlValue::deserialize(deserializer).map(|raw| coerce_text(&raw))
}
