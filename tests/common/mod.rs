// Shared fixtures for integration tests

#![allow(dead_code)]

use uritemplate::{VariableBag, VariableValue};

/// The variable set used throughout RFC 6570 section 3.2
pub fn rfc_variables() -> VariableBag {
    VariableBag::new()
        .with("count", ["one", "two", "three"])
        .with("dom", ["example", "com"])
        .with("dub", "me/too")
        .with("hello", "Hello World!")
        .with("half", "50%")
        .with("var", "value")
        .with("who", "fred")
        .with("base", "http://example.com/home/")
        .with("path", "/foo/bar")
        .with("list", ["red", "green", "blue"])
        .with("keys", [("semi", ";"), ("dot", "."), ("comma", ",")])
        .with("v", "6")
        .with("x", "1024")
        .with("y", "768")
        .with("empty", "")
        .with("empty_keys", VariableValue::AssocMap(vec![]))
}

/// Assert every `(notation, expected)` pair expands as expected
pub fn assert_expansions(variables: &VariableBag, cases: &[(&str, &str)]) {
    for (notation, expected) in cases {
        let template = uritemplate::Template::new(*notation)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", notation, e));
        assert_eq!(
            template.expand(variables),
            *expected,
            "expanding {}",
            notation
        );
    }
}
