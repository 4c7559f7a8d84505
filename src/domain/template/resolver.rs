// Template expansion against a bag of variables

use tracing::trace;

use super::ast::{Expression, Segment, VarSpec};
use super::operator::Operator;
use crate::domain::variables::{VariableBag, VariableValue};

/// Expands parsed segments into a URI string
pub struct TemplateResolver;

impl TemplateResolver {
    /// Expand every segment in order. Never fails: type problems are caught when the bag is built.
    pub fn resolve(segments: &[Segment], variables: &VariableBag) -> String {
        let mut result = String::new();

        for segment in segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Expression(expr) => Self::expand_expression(expr, variables, &mut result),
            }
        }

        result
    }

    fn expand_expression(expr: &Expression, variables: &VariableBag, result: &mut String) {
        let op = expr.operator;
        let parts: Vec<String> = expr
            .var_specs
            .iter()
            .filter_map(|spec| Self::expand_var_spec(op, spec, variables.fetch(&spec.name)))
            .collect();

        if parts.is_empty() {
            trace!(expression = %expr, "expression expanded to nothing");
            return;
        }

        result.push_str(op.prefix());
        result.push_str(&parts.join(op.separator()));
    }

    fn expand_var_spec(op: Operator, spec: &VarSpec, value: &VariableValue) -> Option<String> {
        if value.is_undefined() {
            trace!(variable = %spec.name, "skipping undefined variable");
            return None;
        }

        let expanded = match value {
            VariableValue::Undefined => return None,
            VariableValue::Scalar(s) => Self::expand_scalar(op, spec, s),
            VariableValue::List(items) if spec.is_exploded() => Self::explode_list(op, spec, items),
            VariableValue::List(items) => Self::join_list(op, spec, items),
            VariableValue::AssocMap(pairs) if spec.is_exploded() => Self::explode_map(op, pairs),
            VariableValue::AssocMap(pairs) => Self::join_map(op, spec, pairs),
        };

        Some(expanded)
    }

    fn expand_scalar(op: Operator, spec: &VarSpec, value: &str) -> String {
        let value = match spec.prefix_length() {
            Some(length) => truncate_chars(value, length),
            None => value,
        };
        let encoded = op.encoding().encode(value);

        if op.is_named() {
            named(op, &spec.name, &encoded)
        } else {
            encoded.into_owned()
        }
    }

    fn join_list(op: Operator, spec: &VarSpec, items: &[String]) -> String {
        let joined = items
            .iter()
            .map(|item| op.encoding().encode(item))
            .collect::<Vec<_>>()
            .join(",");

        if op.is_named() {
            named(op, &spec.name, &joined)
        } else {
            joined
        }
    }

    fn explode_list(op: Operator, spec: &VarSpec, items: &[String]) -> String {
        items
            .iter()
            .map(|item| {
                let encoded = op.encoding().encode(item);
                if op.is_named() {
                    format!("{}={}", spec.name, encoded)
                } else {
                    encoded.into_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(op.separator())
    }

    fn join_map(op: Operator, spec: &VarSpec, pairs: &[(String, String)]) -> String {
        let joined = pairs
            .iter()
            .flat_map(|(key, value)| [op.encoding().encode(key), op.encoding().encode(value)])
            .collect::<Vec<_>>()
            .join(",");

        if op.is_named() {
            named(op, &spec.name, &joined)
        } else {
            joined
        }
    }

    fn explode_map(op: Operator, pairs: &[(String, String)]) -> String {
        pairs
            .iter()
            .map(|(key, value)| {
                let key = op.encoding().encode(key);
                let value = op.encoding().encode(value);
                format!("{}={}", key, value)
            })
            .collect::<Vec<_>>()
            .join(op.separator())
    }
}

/// `name=value`, or `name` followed by the operator's empty marker
fn named(op: Operator, name: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{}{}", name, op.if_empty())
    } else {
        format!("{}={}", name, value)
    }
}

/// First `length` Unicode code points of `value`
fn truncate_chars(value: &str, length: usize) -> &str {
    match value.char_indices().nth(length) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
