//! End-to-end behaviour of the public entry points and accessors.

use json_tree::{parse, try_parse, ChildKey, Error, Kind, Node, Parser, ParserConfig};
use test_case::test_case;

#[test_case("null", Node::Null; "null")]
#[test_case("true", Node::Bool(true); "true")]
#[test_case("false", Node::Bool(false); "false")]
#[test_case("-12.5e1", Node::Number(-125.0); "number")]
#[test_case(r#""foo""#, Node::String("foo".into()); "string")]
fn scalar_literals(input: &str, expected: Node) {
    assert_eq!(parse(input), Ok(expected.clone()));
    assert_eq!(try_parse(input), Some(expected));
}

#[test]
fn escape_sequences() {
    let node = parse(r#""\t\\\"\/\b\f\r\n""#).unwrap();
    assert_eq!(node.as_str(), Some("\t\\\"/\u{8}\u{c}\r\n"));
}

#[test]
fn invalid_escape_passthrough() {
    assert_eq!(parse(r#""foo \x""#).unwrap().as_str(), Some(r"foo \x"));
    assert_eq!(parse(r#""foo \u123""#).unwrap().as_str(), Some(r"foo \u123"));
}

#[test]
fn unicode_escape() {
    assert_eq!(parse(r#""foo\u00f8bar""#).unwrap().as_str(), Some("fooøbar"));
}

#[test]
fn array_navigation() {
    let node = parse(r#"[1,"foo",true]"#).unwrap();
    assert_eq!(node.get(0).and_then(Node::as_number), Some(1.0));
    assert_eq!(node.get(1).and_then(Node::as_str), Some("foo"));
    assert_eq!(node.get(2).and_then(Node::as_bool), Some(true));
    assert_eq!(node.children().len(), 3);

    assert_eq!(node.get(-1), None);
    assert_eq!(node.get(5), None);
    assert_eq!(
        node.require(-1),
        Err(Error::MissingChild {
            key: ChildKey::Index(-1),
            actual: Kind::Array
        })
    );
    assert!(matches!(
        node.require(5),
        Err(Error::MissingChild { key: ChildKey::Index(5), .. })
    ));
}

#[test]
fn object_lookup() {
    let node = parse(r#"{"foo":"bar"}"#).unwrap();
    assert_eq!(node.require("foo").and_then(Node::require_str), Ok("bar"));
    assert_eq!(node.get("baz"), None);
    assert_eq!(
        node.require("baz"),
        Err(Error::MissingChild {
            key: ChildKey::Name("baz".into()),
            actual: Kind::Object
        })
    );
}

#[test]
fn nested_document() {
    let input = r#"
        {
            "name": "widget",
            "sizes": [1, 2.5, -3e2],
            "meta": { "enabled": false, "owner": null }
        }
    "#;
    let node = parse(input).unwrap();
    assert_eq!(node.require("name").unwrap().as_str(), Some("widget"));
    assert_eq!(node.require("sizes").unwrap().require(2).unwrap().require_number(), Ok(-300.0));
    let meta = node.require("meta").unwrap();
    assert_eq!(meta.require("enabled").unwrap().as_bool(), Some(false));
    assert!(meta.require("owner").unwrap().is_null());
    assert_eq!(meta.properties().len(), 2);
}

#[test_case("[abc}"; "mismatched brackets")]
#[test_case("true_"; "trailing garbage")]
#[test_case("nul"; "truncated literal")]
#[test_case("[1] [2]"; "two documents")]
#[test_case(""; "empty input")]
#[test_case("   "; "only whitespace")]
#[test_case(r#"{"a":1"#; "unclosed object")]
fn malformed(input: &str) {
    assert!(matches!(parse(input), Err(Error::MalformedDocument { .. })));
    assert_eq!(try_parse(input), None);
}

#[test]
fn malformed_error_message() {
    let err = parse("[abc}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to parse JSON. Unexpected character sequence at position 1: 'abc}'"
    );
}

#[test]
fn malformed_reports_where_reading_stopped() {
    let input = r#"{"a": [1, 2, x]}"#;
    let Err(Error::MalformedDocument { position, excerpt }) = parse(input) else {
        panic!("expected a malformed document");
    };
    assert_eq!(position, input.find('x').unwrap());
    assert_eq!(excerpt, "x]}");
}

#[test]
fn null_has_no_scalar_value() {
    let node = parse("null").unwrap();
    assert_eq!(node.as_bool(), None);
    assert_eq!(node.as_number(), None);
    assert_eq!(node.as_str(), None);
    assert_eq!(
        node.require_bool(),
        Err(Error::TypeMismatch {
            expected: Kind::Bool,
            actual: Kind::Null
        })
    );
    assert!(matches!(
        node.require_number(),
        Err(Error::TypeMismatch { expected: Kind::Number, actual: Kind::Null })
    ));
    assert!(matches!(
        node.require_str(),
        Err(Error::TypeMismatch { expected: Kind::String, actual: Kind::Null })
    ));
}

#[test]
fn configured_parser() {
    let parser = Parser::with_config(ParserConfig::default().with_max_depth(1).with_excerpt_len(4));
    assert_eq!(parser.parse("[1, 2]").unwrap().children().len(), 2);
    assert_eq!(
        parser.parse("[[1]]"),
        Err(Error::MalformedDocument {
            position: 2,
            excerpt: "1]]".into()
        })
    );
}

#[test]
fn parsed_tree_is_shareable_across_threads() {
    let node = std::sync::Arc::new(parse(r#"{"items": [1, 2, 3]}"#).unwrap());
    let handles: Vec<_> = (0..4usize)
        .map(|i| {
            let node = std::sync::Arc::clone(&node);
            std::thread::spawn(move || {
                node.require("items")
                    .and_then(|items| items.require(i % 3))
                    .and_then(Node::require_number)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok((i % 3 + 1) as f64));
    }
}
