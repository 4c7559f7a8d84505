// Domain model for URI templates

pub mod template;
mod uri_template;
mod variables;

pub use uri_template::Template;
pub use variables::{VariableBag, VariableValue};
