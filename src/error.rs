// Error handling for uritemplate

use thiserror::Error;

/// Errors raised while parsing a notation or binding variables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The notation is malformed. Only raised while parsing.
    #[error("Invalid template syntax in '{notation}' at position {position}: {reason}")]
    Syntax {
        notation: String,
        position: usize,
        reason: String,
    },

    /// A variable value is not a scalar, a list of scalars or a map of scalars.
    #[error("Invalid variable '{name}': {reason}")]
    InvalidVariable { name: String, reason: String },

    /// The notation itself was not given as a string.
    #[error("Template notation must be a string, found {found}")]
    TypeContract { found: String },

    /// Strict expansion found variables that resolve to undefined.
    #[error("Missing required variables: {}", names.join(", "))]
    MissingVariables { names: Vec<String> },
}

impl TemplateError {
    pub(crate) fn syntax(notation: &str, position: usize, reason: impl Into<String>) -> Self {
        TemplateError::Syntax {
            notation: notation.to_string(),
            position,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_variable(name: &str, reason: impl Into<String>) -> Self {
        TemplateError::InvalidVariable {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
