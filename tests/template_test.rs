// Tests for the public Template API

mod common;

use std::sync::Arc;
use std::thread;

use serde_json::json;
use uritemplate::{Template, TemplateError, VariableBag, VariableValue};

#[test]
fn test_round_trip_preserves_notation() {
    for notation in [
        "",
        "http://example.com{+path}{/segments}{?query,more*}",
        "{a.b,%C3%A9}{#x:12}",
        "caf\u{e9}{;x,y}/tail",
        "no expressions at all",
    ] {
        let template: Template = notation.parse().unwrap();
        assert_eq!(template.to_string(), notation);
        assert_eq!(template.as_str(), notation);
    }
}

#[test]
fn test_invalid_notations_fail() {
    for notation in ["fooba{r", "fooba}r", "{foo{bar", "{foo}}bar", "{}", "{var:3*}"] {
        match Template::new(notation) {
            Err(TemplateError::Syntax { notation: n, .. }) => assert_eq!(n, notation),
            other => panic!("Expected syntax error for {}, got {:?}", notation, other),
        }
    }
}

#[test]
fn test_literal_only_template_is_unchanged() {
    let template = Template::new("foobar").unwrap();
    assert_eq!(template.expand(&VariableBag::new()), "foobar");
}

#[test]
fn test_scalar_substitution() {
    let template = Template::new("foobar{var}").unwrap();
    let vars = VariableBag::new().with("var", "yolo");
    assert_eq!(template.expand(&vars), "foobaryolo");
}

#[test]
fn test_undefined_variable_expands_to_nothing() {
    let template = Template::new("{undef}").unwrap();
    assert_eq!(template.expand(&VariableBag::new()), "");
}

#[test]
fn test_empty_collections_match_unbound_names() {
    let template = Template::new("/x{?list*,keys}{/list}").unwrap();
    let empty = VariableBag::new()
        .with("list", VariableValue::List(vec![]))
        .with("keys", VariableValue::AssocMap(vec![]));
    assert_eq!(template.expand(&empty), template.expand(&VariableBag::new()));
    assert_eq!(template.expand(&empty), "/x");
}

#[test]
fn test_full_url_expansion() {
    let template = Template::new("http://example.com{+path}{/segments}{?query,more*}").unwrap();
    let vars = VariableBag::new()
        .with("path", "/api/v1")
        .with("segments", ["users", "42"])
        .with("query", "a b")
        .with("more", [("page", "2"), ("sort", "name desc")]);

    assert_eq!(
        template.expand(&vars),
        "http://example.com/api/v1/users,42?query=a%20b&page=2&sort=name%20desc"
    );
}

#[test]
fn test_default_variables_lifecycle() {
    let defaults = VariableBag::new()
        .with("version", "v1")
        .with("unused", "x");
    let template = Template::with_defaults("/api/{version}{/resource}", defaults).unwrap();

    assert_eq!(template.default_variables().names().collect::<Vec<_>>(), vec!["version"]);
    assert_eq!(
        template.expand(&VariableBag::new().with("resource", "users")),
        "/api/v1/users"
    );

    let v2 = template.with_default_variables(VariableBag::new().with("version", "v2"));
    assert_eq!(v2.expand(&VariableBag::new()), "/api/v2");
    assert_eq!(template.expand(&VariableBag::new()), "/api/v1");

    let moved = template.with_template("/other/{resource}").unwrap();
    assert!(moved.default_variables().is_empty());
    assert_eq!(moved.variable_names(), ["resource"]);
}

#[test]
fn test_expand_json_rejects_unclassifiable_values() {
    let template = Template::new("{a}").unwrap();
    let err = template.expand_json(&json!({"a": {"nested": [1]}})).unwrap_err();
    assert_eq!(
        err,
        TemplateError::InvalidVariable {
            name: "a".to_string(),
            reason: "nested lists are not supported".to_string(),
        }
    );
}

#[test]
fn test_expand_json_preserves_map_order() {
    let template = Template::new("{?keys*}").unwrap();
    let out = template
        .expand_json(&json!({"keys": {"z": "1", "a": "2", "m": "3"}}))
        .unwrap();
    assert_eq!(out, "?z=1&a=2&m=3");
}

#[test]
fn test_template_notation_type_contract() {
    assert!(matches!(
        Template::try_from(&json!({"template": "{x}"})),
        Err(TemplateError::TypeContract { .. })
    ));
    assert!(Template::try_from(&json!("{x}")).is_ok());
}

#[test]
fn test_template_shared_across_threads() {
    let template = Arc::new(Template::new("{/who}{?list*}").unwrap());
    let vars = Arc::new(common::rfc_variables());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let template = Arc::clone(&template);
            let vars = Arc::clone(&vars);
            thread::spawn(move || template.expand(&vars))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "/fred?list=red&list=green&list=blue");
    }
}
