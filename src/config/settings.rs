// Template settings loaded from a YAML or JSON file

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::domain::{Template, VariableBag};

/// A template notation plus the variables to expand it with
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct TemplateSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub defaults: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub variables: Value,
}

impl TemplateSettings {
    /// Parse settings text. JSON is valid YAML, so one parser covers both.
    pub fn parse(text: &str) -> Result<Self> {
        let settings: TemplateSettings =
            serde_yaml::from_str(text).context("Invalid template settings")?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// The configured template, with defaults attached.
    pub fn template(&self) -> Result<Option<Template>> {
        let Some(notation) = &self.template else {
            return Ok(None);
        };
        let template = Template::from_json(notation)?;
        Ok(Some(template.with_default_variables(self.defaults()?)))
    }

    pub fn defaults(&self) -> Result<VariableBag> {
        Ok(VariableBag::try_from(&self.defaults)?)
    }

    pub fn variables(&self) -> Result<VariableBag> {
        Ok(VariableBag::try_from(&self.variables)?)
    }
}

/// Split a `NAME=VALUE` command line assignment.
pub fn parse_assignment(assignment: &str) -> Result<(String, String)> {
    let Some((name, value)) = assignment.split_once('=') else {
        bail!("Expected NAME=VALUE but got '{}'", assignment);
    };
    if name.is_empty() {
        bail!("Variable name cannot be empty in '{}'", assignment);
    }
    Ok((name.to_string(), value.to_string()))
}
