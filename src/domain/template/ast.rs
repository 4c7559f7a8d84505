// Abstract Syntax Tree types for URI templates

use std::fmt;

use super::operator::Operator;

/// A template consists of literal runs and `{...}` expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Expression(Expression),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Expression(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

/// An operator followed by one or more variable specifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub operator: Operator,
    pub var_specs: Vec<VarSpec>,
}

impl Expression {
    pub fn new(operator: Operator, var_specs: Vec<VarSpec>) -> Self {
        Self { operator, var_specs }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        if let Some(ch) = self.operator.as_char() {
            write!(f, "{}", ch)?;
        }
        for (i, spec) in self.var_specs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(spec, f)?;
        }
        f.write_str("}")
    }
}

/// A variable name with an optional modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub name: String,
    pub modifier: Option<Modifier>,
}

impl VarSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifier: None,
        }
    }

    pub fn with_prefix(mut self, length: usize) -> Self {
        self.modifier = Some(Modifier::Prefix(length));
        self
    }

    pub fn with_explode(mut self) -> Self {
        self.modifier = Some(Modifier::Explode);
        self
    }

    pub fn is_exploded(&self) -> bool {
        matches!(self.modifier, Some(Modifier::Explode))
    }

    pub fn prefix_length(&self) -> Option<usize> {
        match self.modifier {
            Some(Modifier::Prefix(length)) => Some(length),
            _ => None,
        }
    }
}

impl fmt::Display for VarSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match self.modifier {
            Some(Modifier::Prefix(length)) => write!(f, ":{}", length),
            Some(Modifier::Explode) => f.write_str("*"),
            None => Ok(()),
        }
    }
}

/// Value modifiers (RFC 6570 level 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// `:N`, keep the first N code points of a scalar
    Prefix(usize),
    /// `*`, expand each list item or map pair separately
    Explode,
}

/// Variable names in order of first appearance, each listed once
pub fn variable_names(segments: &[Segment]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for segment in segments {
        if let Segment::Expression(expr) = segment {
            for spec in &expr.var_specs {
                if !names.contains(&spec.name) {
                    names.push(spec.name.clone());
                }
            }
        }
    }
    names
}
