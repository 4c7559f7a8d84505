// Template module for RFC 6570 URI templates
//
// This module provides parsing of template notation into segments and the
// expansion of those segments against typed variables.

mod ast;
mod encoding;
mod operator;
mod parser;
mod resolver;

pub use ast::{variable_names, Expression, Modifier, Segment, VarSpec};
pub use encoding::Encoding;
pub use operator::Operator;
pub use parser::TemplateParser;
pub use resolver::TemplateResolver;
