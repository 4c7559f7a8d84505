// Expression operators and their expansion behavior (RFC 6570 section 3.2)

use super::encoding::Encoding;

/// The operator character that opens an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `{var}`
    Simple,
    /// `{+var}`
    Reserved,
    /// `{#var}`
    Fragment,
    /// `{.var}`
    Label,
    /// `{/var}`
    PathSegment,
    /// `{;var}`
    PathParameter,
    /// `{?var}`
    Query,
    /// `{&var}`
    QueryContinuation,
}

/// How an operator joins and encodes the values of its expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OperatorSpec {
    pub prefix: &'static str,
    pub separator: &'static str,
    pub named: bool,
    pub if_empty: &'static str,
    pub encoding: Encoding,
}

const fn spec(
    prefix: &'static str,
    separator: &'static str,
    named: bool,
    if_empty: &'static str,
    encoding: Encoding,
) -> OperatorSpec {
    OperatorSpec {
        prefix,
        separator,
        named,
        if_empty,
        encoding,
    }
}

const SIMPLE: OperatorSpec = spec("", ",", false, "", Encoding::Unreserved);
const RESERVED: OperatorSpec = spec("", ",", false, "", Encoding::UnreservedAndReserved);
const FRAGMENT: OperatorSpec = spec("#", ",", false, "", Encoding::UnreservedAndReserved);
const LABEL: OperatorSpec = spec(".", ".", false, "", Encoding::Unreserved);
const PATH_SEGMENT: OperatorSpec = spec("/", "/", false, "", Encoding::Unreserved);
const PATH_PARAMETER: OperatorSpec = spec(";", ";", true, "", Encoding::Unreserved);
const QUERY: OperatorSpec = spec("?", "&", true, "=", Encoding::Unreserved);
const QUERY_CONTINUATION: OperatorSpec = spec("&", "&", true, "=", Encoding::Unreserved);

impl Operator {
    /// Map an expression's leading character to its operator.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::PathSegment),
            ';' => Some(Operator::PathParameter),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryContinuation),
            _ => None,
        }
    }

    /// Characters RFC 6570 keeps back for future operators.
    pub fn is_reserved_for_future_use(ch: char) -> bool {
        matches!(ch, '=' | ',' | '!' | '@' | '|')
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Operator::Simple => None,
            Operator::Reserved => Some('+'),
            Operator::Fragment => Some('#'),
            Operator::Label => Some('.'),
            Operator::PathSegment => Some('/'),
            Operator::PathParameter => Some(';'),
            Operator::Query => Some('?'),
            Operator::QueryContinuation => Some('&'),
        }
    }

    pub(crate) fn spec(&self) -> &'static OperatorSpec {
        match self {
            Operator::Simple => &SIMPLE,
            Operator::Reserved => &RESERVED,
            Operator::Fragment => &FRAGMENT,
            Operator::Label => &LABEL,
            Operator::PathSegment => &PATH_SEGMENT,
            Operator::PathParameter => &PATH_PARAMETER,
            Operator::Query => &QUERY,
            Operator::QueryContinuation => &QUERY_CONTINUATION,
        }
    }

    pub fn prefix(&self) -> &'static str {
        self.spec().prefix
    }

    pub fn separator(&self) -> &'static str {
        self.spec().separator
    }

    pub fn is_named(&self) -> bool {
        self.spec().named
    }

    pub fn if_empty(&self) -> &'static str {
        self.spec().if_empty
    }

    pub fn encoding(&self) -> Encoding {
        self.spec().encoding
    }
}
