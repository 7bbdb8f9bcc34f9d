use chrono::{TimeZone, Utc};
use object_marshal::{value, Map, Number, Value};

#[test]
fn test_value_macro_null() {
    assert_eq!(value!(null), Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Number::Integer(42)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("node01"), Value::String("node01".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_nested() {
    let node = value!({
        "@uuid": "4f1a",
        "@hw_id": ["00:50:56:aa", "00:50:56:bb"],
        "@attributes": {
            "cpus": 8,
            "virtual": false,
            "bmc": null
        }
    });

    let attributes = node.get("@attributes").and_then(|v| v.as_object()).unwrap();
    assert_eq!(attributes.len(), 3);
    assert_eq!(attributes.get("cpus"), Some(&Value::from(8)));
    assert_eq!(attributes.get("bmc"), Some(&Value::Null));
    assert_eq!(
        node.get("@hw_id").and_then(|v| v.as_array()).map(Vec::len),
        Some(2)
    );
}

#[test]
fn test_value_macro_trailing_commas() {
    let list = value!([1, 2,]);
    assert_eq!(list, Value::Array(vec![Value::from(1), Value::from(2)]));

    let map = value!({ "a": 1, });
    let mut expected = Map::new();
    expected.insert("a".to_string(), Value::from(1));
    assert_eq!(map, Value::Object(expected));
}

#[test]
fn test_value_macro_expressions() {
    let cpus = 4 * 2;
    assert_eq!(value!(cpus), Value::from(8));

    let tags = vec!["gpu", "ssd"];
    assert_eq!(value!(tags), value!(["gpu", "ssd"]));

    let bmc: Option<&str> = None;
    assert_eq!(value!(bmc), Value::Null);

    let booted = Utc.with_ymd_and_hms(2013, 5, 13, 18, 30, 0).unwrap();
    assert_eq!(value!(booted), Value::Date(booted));

    let mut attributes = Map::new();
    attributes.insert("rack".to_string(), Value::from("r4"));
    assert_eq!(value!(attributes.clone()), Value::Object(attributes));
}
