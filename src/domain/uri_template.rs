// The public URI template value

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::template::{variable_names, Segment, TemplateParser, TemplateResolver};
use super::variables::{json_kind, VariableBag};
use crate::error::{Result, TemplateError};

/// A parsed URI template together with its default variables.
///
/// The notation is parsed once at construction. Every `with_*` method returns
/// a new template and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    notation: String,
    segments: Vec<Segment>,
    variable_names: Vec<String>,
    default_variables: VariableBag,
}

impl Template {
    pub fn new(notation: impl Into<String>) -> Result<Self> {
        Self::with_defaults(notation, VariableBag::new())
    }

    /// Parse `notation` and keep the defaults whose names appear in it.
    pub fn with_defaults(notation: impl Into<String>, defaults: VariableBag) -> Result<Self> {
        let notation = notation.into();
        let segments = TemplateParser::parse(&notation)?;
        let variable_names = variable_names(&segments);
        let default_variables = defaults.filtered(variable_names.as_slice());

        debug!(
            notation = %notation,
            variables = variable_names.len(),
            defaults = default_variables.len(),
            "built template"
        );

        Ok(Self {
            notation,
            segments,
            variable_names,
            default_variables,
        })
    }

    /// Build from a dynamic value; anything but a string breaks the type contract.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(notation) => Self::new(notation.as_str()),
            other => Err(TemplateError::TypeContract {
                found: json_kind(other).to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.notation
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Variable names in order of first appearance, each listed once.
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    pub fn default_variables(&self) -> &VariableBag {
        &self.default_variables
    }

    pub fn expand(&self, variables: &VariableBag) -> String {
        let variables = variables.merged_over(&self.default_variables);
        TemplateResolver::resolve(&self.segments, &variables)
    }

    /// Expand from a dynamic mapping, classifying each value first.
    pub fn expand_json(&self, variables: &Value) -> Result<String> {
        let variables = VariableBag::try_from(variables)?;
        Ok(self.expand(&variables))
    }

    /// Expand, failing if any variable in the notation resolves to undefined.
    pub fn expand_or_fail(&self, variables: &VariableBag) -> Result<String> {
        let variables = variables.merged_over(&self.default_variables);
        let missing: Vec<String> = self
            .variable_names
            .iter()
            .filter(|name| variables.fetch(name).is_undefined())
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Err(TemplateError::MissingVariables { names: missing });
        }

        Ok(TemplateResolver::resolve(&self.segments, &variables))
    }

    /// Re-parse with a new notation; defaults are narrowed to the new variable names.
    pub fn with_template(&self, notation: impl Into<String>) -> Result<Self> {
        let notation = notation.into();
        if notation == self.notation {
            return Ok(self.clone());
        }
        Self::with_defaults(notation, self.default_variables.clone())
    }

    /// Replace the defaults, keeping only names present in the notation.
    pub fn with_default_variables(&self, defaults: VariableBag) -> Self {
        Self {
            notation: self.notation.clone(),
            segments: self.segments.clone(),
            variable_names: self.variable_names.clone(),
            default_variables: defaults.filtered(self.variable_names.as_slice()),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(notation: &str) -> Result<Self> {
        Self::new(notation)
    }
}

impl TryFrom<&str> for Template {
    type Error = TemplateError;

    fn try_from(notation: &str) -> Result<Self> {
        Self::new(notation)
    }
}

impl TryFrom<String> for Template {
    type Error = TemplateError;

    fn try_from(notation: String) -> Result<Self> {
        Self::new(notation)
    }
}

impl TryFrom<&Value> for Template {
    type Error = TemplateError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.notation)
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let notation = String::deserialize(deserializer)?;
        Template::new(notation).map_err(de::Error::custom)
    }
}
