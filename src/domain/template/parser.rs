// Template parser using recursive descent

use tracing::trace;

use super::ast::{Expression, Modifier, Segment, VarSpec};
use super::operator::Operator;
use crate::error::{Result, TemplateError};

const MAX_PREFIX_LENGTH: usize = 9999;

pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(notation: &'a str) -> Result<Vec<Segment>> {
        let mut parser = Self {
            input: notation,
            pos: 0,
        };
        let segments = parser.parse_template()?;
        trace!(notation, segments = segments.len(), "parsed template notation");
        Ok(segments)
    }

    fn parse_template(&mut self) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();

        while let Some(ch) = self.peek_char() {
            match ch {
                '{' => {
                    if !literal_buf.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal_buf)));
                    }
                    let expr = self.parse_expression()?;
                    segments.push(Segment::Expression(expr));
                }
                '}' => return Err(self.error("unexpected closing brace")),
                _ => {
                    literal_buf.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }

        if !literal_buf.is_empty() {
            segments.push(Segment::Literal(literal_buf));
        }

        Ok(segments)
    }

    fn parse_expression(&mut self) -> Result<Expression> {
        let start = self.pos;
        self.pos += 1; // consume {

        let operator = match self.peek_char() {
            Some('}') => return Err(self.error("empty expression")),
            Some(ch) if Operator::is_reserved_for_future_use(ch) => {
                return Err(self.error(format!("operator '{}' is reserved", ch)));
            }
            Some(ch) => match Operator::from_char(ch) {
                Some(op) => {
                    self.pos += 1;
                    op
                }
                None => Operator::Simple,
            },
            None => return Err(TemplateError::syntax(self.input, start, "unclosed expression")),
        };

        let mut var_specs = Vec::new();
        loop {
            var_specs.push(self.parse_var_spec(start)?);

            match self.peek_char() {
                Some(',') => self.pos += 1,
                Some('}') => {
                    self.pos += 1;
                    break;
                }
                Some('{') => return Err(self.error("nested opening brace")),
                Some(ch) => {
                    return Err(self.error(format!("invalid character '{}' in variable name", ch)));
                }
                None => {
                    return Err(TemplateError::syntax(self.input, start, "unclosed expression"));
                }
            }
        }

        Ok(Expression::new(operator, var_specs))
    }

    fn parse_var_spec(&mut self, expr_start: usize) -> Result<VarSpec> {
        let name = self.parse_variable_name()?;

        if name.is_empty() {
            return Err(match self.peek_char() {
                Some('{') => self.error("nested opening brace"),
                None => TemplateError::syntax(self.input, expr_start, "unclosed expression"),
                Some(ch) if ch == ',' || ch == '}' || ch == ':' || ch == '*' => {
                    self.error("empty variable name")
                }
                Some(ch) => self.error(format!("invalid character '{}' in variable name", ch)),
            });
        }

        let modifier = self.parse_modifier()?;
        Ok(VarSpec { name, modifier })
    }

    fn parse_variable_name(&mut self) -> Result<String> {
        let mut name = String::new();

        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' {
                name.push(ch);
                self.pos += 1;
            } else if ch == '%' {
                let triple = self.input.get(self.pos..self.pos + 3).unwrap_or("");
                let bytes = triple.as_bytes();
                if bytes.len() != 3 || !bytes[1].is_ascii_hexdigit() || !bytes[2].is_ascii_hexdigit() {
                    return Err(self.error("malformed percent-encoded triple in variable name"));
                }
                name.push_str(triple);
                self.pos += 3;
            } else {
                break;
            }
        }

        Ok(name)
    }

    fn parse_modifier(&mut self) -> Result<Option<Modifier>> {
        let modifier = match self.peek_char() {
            Some(':') => {
                self.pos += 1;
                Some(Modifier::Prefix(self.parse_prefix_length()?))
            }
            Some('*') => {
                self.pos += 1;
                Some(Modifier::Explode)
            }
            _ => None,
        };

        match (modifier, self.peek_char()) {
            (Some(Modifier::Prefix(_)), Some('*')) => {
                return Err(self.error("prefix and explode modifiers cannot be combined"));
            }
            (Some(_), Some('*')) | (Some(_), Some(':')) => {
                return Err(self.error("a variable accepts only one modifier"));
            }
            _ => {}
        }

        Ok(modifier)
    }

    fn parse_prefix_length(&mut self) -> Result<usize> {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.pos += 1;
        }

        let digits = &self.input[start..self.pos];
        if digits.is_empty() {
            return Err(self.error("prefix modifier requires a length"));
        }
        if digits.starts_with('0') || digits.len() > 4 {
            return Err(TemplateError::syntax(
                self.input,
                start,
                format!(
                    "prefix length '{}' must be between 1 and {}",
                    digits, MAX_PREFIX_LENGTH
                ),
            ));
        }

        digits
            .parse()
            .map_err(|_| TemplateError::syntax(self.input, start, "invalid prefix length"))
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn error(&self, reason: impl Into<String>) -> TemplateError {
        TemplateError::syntax(self.input, self.pos, reason)
    }
}
