//! End-to-end behavior of parse, access and encode together.

use std::collections::HashMap;

use libjsonish::{parse, parse_strict, pretty, pretty_print, serialize, Value};

fn answer() -> Value {
    [
        ("answer", Value::from(42)),
        ("question", Value::from("6 * 9")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_string_escape_decoding() {
    let value = parse("\"test\\nString\"").unwrap();
    assert_eq!(value, Value::from("test\nString"));
}

#[test]
fn test_quoted_object() {
    let value = parse("{\"answer\": 42, \"question\": \"6 * 9\"}").unwrap();
    assert_eq!(value, answer());
}

#[test]
fn test_bare_key_object() {
    let value = parse("{answer: 42, question: \"6 * 9\"}").unwrap();
    assert_eq!(value, answer());
}

#[test]
fn test_remove_array_element() {
    let mut value = parse("[0, 1, 2]").unwrap();
    value.set(1, None);
    assert_eq!(value, Value::from(vec![Value::from(0), Value::from(2)]));
}

#[test]
fn test_nullable_fails() {
    assert!(parse("nullable").is_err());
}

#[test]
fn test_serialize_has_no_trailing_comma() {
    assert_eq!(serialize(&parse("[1,2]").unwrap()), "[1,2]");
    assert_eq!(serialize(&parse("{a: 1, b: 2}").unwrap()), r#"{"a":1,"b":2}"#);
    assert!(!pretty(&parse("[1,2]").unwrap()).contains(",\n]"));
}

// Permissive and strict grammars agree on strict JSON and differ only on
// the two extensions.
#[test]
fn test_strict_and_permissive_agree_on_json() {
    for input in [
        "null",
        "[1, 2.5, \"x\"]",
        "{\"a\": {\"b\": [true, false]}}",
        "  {\"k\": \"v\"}  \n",
    ] {
        assert_eq!(parse(input).unwrap(), parse_strict(input).unwrap(), "{}", input);
    }
}

#[test]
fn test_permissive_extensions_rejected_by_strict() {
    assert!(parse("{answer: 42}").is_ok());
    assert!(parse_strict("{answer: 42}").is_err());

    assert!(parse("[1] [2]").is_ok());
    assert!(parse_strict("[1] [2]").is_err());
}

#[test]
fn test_round_trip_escaped_strings() {
    let tricky = [
        "plain",
        "quote \" inside",
        "backslash \\ inside",
        "ends with backslash \\",
        "newline\nand\ttab",
        "\"\\\"",
        "",
    ];
    for text in tricky {
        let value = Value::from(text);
        assert_eq!(parse(&serialize(&value)).unwrap(), value, "{:?}", text);
        assert_eq!(parse(&pretty(&value)).unwrap(), value, "{:?}", text);
    }
}

#[test]
fn test_round_trip_built_value() {
    let mut inner = HashMap::new();
    inner.insert("weird key: \"x\"".to_string(), Value::from(vec![Value::Null]));
    inner.insert("n".to_string(), Value::from(1024));

    let value: Value = vec![
        Value::Boolean(true),
        Value::Number(0.5),
        Value::from("s"),
        Value::Object(inner),
        Value::Array(vec![]),
        Value::Object(HashMap::new()),
    ]
    .into_iter()
    .collect();

    assert_eq!(parse(&serialize(&value)).unwrap(), value);
    assert_eq!(parse(&pretty_print(&value, "\t", 3)).unwrap(), value);
}

#[test]
fn test_encoders_are_pure() {
    let value = parse("{z: [1, {y: null}], a: \"b\", m: {}}").unwrap();
    assert_eq!(serialize(&value), serialize(&value));
    assert_eq!(pretty(&value), pretty(&value));
    assert_eq!(serialize(&value.clone()), serialize(&value));
}

#[test]
fn test_equality_laws() {
    let a = parse("{x: [1, 2], y: {z: null}}").unwrap();
    let b = parse("{y: {z: null}, x: [1, 2]}").unwrap();
    let c = parse(&serialize(&a)).unwrap();

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);
}

#[test]
fn test_array_accessor_laws() {
    let original = parse("[10, 20, 30, 40]").unwrap();
    let n = original.len();

    for i in 0..n {
        let mut replaced = original.clone();
        replaced.set(i, Some(Value::from("x")));
        assert_eq!(replaced.get(i), Some(&Value::from("x")));
        for j in (0..n).filter(|&j| j != i) {
            assert_eq!(replaced.get(j), original.get(j));
        }

        let mut removed = original.clone();
        removed.set(i, None);
        assert_eq!(removed.len(), n - 1);
        let expected: Vec<&Value> = original
            .as_array()
            .unwrap()
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, v)| v)
            .collect();
        let actual: Vec<&Value> = removed.as_array().unwrap().iter().collect();
        assert_eq!(actual, expected);
    }

    assert_eq!(original.get(n), None);
    let mut grown = original.clone();
    grown.set(n, Some(Value::Null));
    assert_eq!(grown, original);
}

#[test]
fn test_object_accessor_laws() {
    let mut object = parse("{a: 1}").unwrap();

    object.set("b", Some(Value::from(2)));
    assert_eq!(object.get("b"), Some(&Value::from(2)));

    let before = object.clone();
    object.set("absent", None);
    assert_eq!(object, before);

    object.set("a", Some(Value::from("first")));
    object.set("a", Some(Value::from("second")));
    assert_eq!(object.get("a"), Some(&Value::from("second")));
    assert_eq!(object.len(), 2);
}

#[test]
fn test_chained_optional_access() {
    let value = parse("{users: [{name: \"ada\"}]}").unwrap();
    let name = value
        .get("users")
        .and_then(|users| users.get(0))
        .and_then(|user| user.get("name"))
        .and_then(Value::as_str);
    assert_eq!(name, Some("ada"));

    let missing = value
        .get("users")
        .and_then(|users| users.get(5))
        .and_then(|user| user.get("name"));
    assert_eq!(missing, None);
}

#[test]
fn test_setter_changes_variant_after_parse() {
    let mut value = parse("{a: [1, 2]}").unwrap();
    if let Some(a) = value.get_mut("a") {
        a.set_string(Some("replaced".to_string()));
    }
    assert_eq!(serialize(&value), r#"{"a":"replaced"}"#);

    value.set_object(None);
    assert_eq!(serialize(&value), "null");
}

#[test]
fn test_round_trip_inexact_fractions() {
    for text in ["0.3", "0.7", "3.14159", "2.675", "123.456", "[0.3, {x: 0.7}]"] {
        let value = parse(text).unwrap();
        assert_eq!(parse(&serialize(&value)).unwrap(), value, "{}", text);
        assert_eq!(parse(&pretty(&value)).unwrap(), value, "{}", text);
    }
}

#[test]
fn test_reencoding_is_stable() {
    let input = "{a: 0.3, b: [0.7, 3.14159, 2.675], c: 123.456, d: 0.1}";
    let first = serialize(&parse(input).unwrap());
    let second = serialize(&parse(&first).unwrap());
    let third = serialize(&parse(&second).unwrap());

    assert_eq!(first, r#"{"a":0.3,"b":[0.7,3.14159,2.675],"c":123.456,"d":0.1}"#);
    assert_eq!(first, second);
    assert_eq!(second, third);
}
