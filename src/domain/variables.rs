// Typed variable values and the bag they are resolved from

use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Result, TemplateError};

/// A value bound to a template variable
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VariableValue {
    #[default]
    Undefined,
    Scalar(String),
    List(Vec<String>),
    /// Ordered pairs, keys unique within the map
    AssocMap(Vec<(String, String)>),
}

static UNDEFINED: VariableValue = VariableValue::Undefined;

impl VariableValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        VariableValue::Scalar(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VariableValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map value. A repeated key keeps its first position and takes the last value.
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut unique: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let (key, value) = (key.into(), value.into());
            match unique.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => unique.push((key, value)),
            }
        }
        VariableValue::AssocMap(unique)
    }

    /// True when the value contributes nothing to an expansion.
    ///
    /// Empty lists and maps count as undefined; an empty scalar does not.
    pub fn is_undefined(&self) -> bool {
        match self {
            VariableValue::Undefined => true,
            VariableValue::Scalar(_) => false,
            VariableValue::List(items) => items.is_empty(),
            VariableValue::AssocMap(pairs) => pairs.is_empty(),
        }
    }

    /// Classify a dynamic value bound to `name`.
    pub fn from_json(name: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(VariableValue::Undefined),
            Value::Array(items) => items
                .iter()
                .map(|item| json_scalar(name, item))
                .collect::<Result<Vec<_>>>()
                .map(VariableValue::List),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, item)| json_scalar(name, item).map(|v| (key.clone(), v)))
                .collect::<Result<Vec<_>>>()
                .map(VariableValue::map),
            scalar => json_scalar(name, scalar).map(VariableValue::Scalar),
        }
    }
}

fn json_scalar(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) => Ok("0".to_string()),
        Value::Null => Err(TemplateError::invalid_variable(
            name,
            "null is not allowed inside a list or map",
        )),
        Value::Array(_) => Err(TemplateError::invalid_variable(
            name,
            "nested lists are not supported",
        )),
        Value::Object(_) => Err(TemplateError::invalid_variable(
            name,
            "nested maps are not supported",
        )),
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::Scalar(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        VariableValue::Scalar(value)
    }
}

impl From<i64> for VariableValue {
    fn from(value: i64) -> Self {
        VariableValue::Scalar(value.to_string())
    }
}

impl From<u64> for VariableValue {
    fn from(value: u64) -> Self {
        VariableValue::Scalar(value.to_string())
    }
}

impl From<bool> for VariableValue {
    fn from(value: bool) -> Self {
        VariableValue::Scalar(if value { "1" } else { "0" }.to_string())
    }
}

impl From<Vec<String>> for VariableValue {
    fn from(items: Vec<String>) -> Self {
        VariableValue::List(items)
    }
}

impl From<Vec<&str>> for VariableValue {
    fn from(items: Vec<&str>) -> Self {
        VariableValue::list(items)
    }
}

impl<const N: usize> From<[&str; N]> for VariableValue {
    fn from(items: [&str; N]) -> Self {
        VariableValue::list(items)
    }
}

impl From<Vec<(String, String)>> for VariableValue {
    fn from(pairs: Vec<(String, String)>) -> Self {
        VariableValue::map(pairs)
    }
}

impl From<Vec<(&str, &str)>> for VariableValue {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        VariableValue::map(pairs)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for VariableValue {
    fn from(pairs: [(&str, &str); N]) -> Self {
        VariableValue::map(pairs)
    }
}

/// Name to value bindings used for one expansion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableBag {
    variables: BTreeMap<String, VariableValue>,
}

impl VariableBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this bag with `name` bound to `value`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<VariableValue>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Look up a name; absent names resolve to `Undefined`.
    pub fn fetch(&self, name: &str) -> &VariableValue {
        self.variables.get(name).unwrap_or(&UNDEFINED)
    }

    pub fn get(&self, name: &str) -> Option<&VariableValue> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableValue)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overlay this bag on top of `defaults`. Same-name entries here replace the default outright.
    pub fn merged_over(&self, defaults: &VariableBag) -> VariableBag {
        let mut variables = defaults.variables.clone();
        for (name, value) in &self.variables {
            variables.insert(name.clone(), value.clone());
        }
        VariableBag { variables }
    }

    /// Keep only the bindings whose names appear in `names`.
    pub fn filtered<S: AsRef<str>>(&self, names: &[S]) -> VariableBag {
        let variables = self
            .variables
            .iter()
            .filter(|(name, _)| names.iter().any(|n| n.as_ref() == name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        VariableBag { variables }
    }

    pub fn from_json_map(entries: &serde_json::Map<String, Value>) -> Result<Self> {
        let variables = entries
            .iter()
            .map(|(name, value)| Ok((name.clone(), VariableValue::from_json(name, value)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(VariableBag { variables })
    }
}

impl TryFrom<&Value> for VariableBag {
    type Error = TemplateError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(VariableBag::new()),
            Value::Object(entries) => VariableBag::from_json_map(entries),
            other => Err(TemplateError::invalid_variable(
                "variables",
                format!("expected a mapping of names to values, found {}", json_kind(other)),
            )),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for VariableBag
where
    K: Into<String>,
    V: Into<VariableValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let variables = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        VariableBag { variables }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
