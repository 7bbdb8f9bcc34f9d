use chrono::{TimeZone, Utc};
use object_marshal::{
    bson_hash_array_to_hash_array, bson_ordered_hash_to_hash, decode_symbols_in_hash,
    encode_symbols_in_hash, new_from_hash, sanitize_hash, value, Assigned, Document, Field, Map,
    Marshal, Result, TypeRegistry, Value,
};

fn document(entries: Vec<(&str, Value)>) -> Document {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

#[test]
fn test_stored_node_normalizes_to_plain_maps() {
    let stored = document(vec![
        ("_id", Value::from("5190e0d7")),
        ("@uuid", Value::from("4f1a")),
        (
            "@hw_id",
            Value::Array(vec![Value::from("00:50:56:aa"), Value::from("00:50:56:bb")]),
        ),
        (
            "@attributes_hash",
            Value::Document(document(vec![
                ("cpus", Value::from(8)),
                (
                    "disks",
                    Value::Array(vec![Value::Document(document(vec![(
                        "size",
                        Value::from(64),
                    )]))]),
                ),
            ])),
        ),
    ]);

    let hash = bson_ordered_hash_to_hash(&stored);

    assert_eq!(
        Value::Object(hash),
        value!({
            "_id": "5190e0d7",
            "@uuid": "4f1a",
            "@hw_id": ["00:50:56:aa", "00:50:56:bb"],
            "@attributes_hash": { "cpus": 8, "disks": [{ "size": 64 }] }
        })
    );
}

#[test]
fn test_normalized_tree_has_no_documents_left() {
    fn contains_document(value: &Value) -> bool {
        match value {
            Value::Document(_) => true,
            Value::Object(map) => map.values().any(contains_document),
            Value::Array(items) => items.iter().any(contains_document),
            _ => false,
        }
    }

    let stored = document(vec![(
        "outer",
        Value::Array(vec![Value::Array(vec![Value::Document(document(vec![(
            "deep",
            Value::Document(Document::new()),
        )]))])]),
    )]);

    let hash = bson_ordered_hash_to_hash(&stored);
    assert!(!contains_document(&Value::Object(hash)));
}

#[test]
fn test_hash_array_conversion() {
    let array = vec![
        Value::Document(document(vec![("a", Value::from(1))])),
        Value::from("x"),
        Value::Null,
    ];

    assert_eq!(
        Value::Array(bson_hash_array_to_hash_array(&array)),
        value!([{ "a": 1 }, "x", null])
    );
    assert!(bson_hash_array_to_hash_array(&[]).is_empty());
}

#[test]
fn test_dates_survive_normalization() {
    let when = Utc.with_ymd_and_hms(2013, 5, 13, 18, 30, 0).unwrap();
    let stored = document(vec![("@timestamp", Value::from(when))]);

    let hash = bson_ordered_hash_to_hash(&stored);
    assert_eq!(hash.get("@timestamp"), Some(&Value::Date(when)));
}

#[test]
fn test_symbols_through_json() {
    let mut tree = Map::new();
    tree.insert("@state".to_string(), Value::symbol("broker_wait"));
    tree.insert(
        "@history".to_string(),
        Value::Array(vec![Value::symbol("init"), Value::from("manual")]),
    );
    let tree = Value::Object(tree);

    let encoded = encode_symbols_in_hash(&tree);
    let json = serde_json::to_string(&encoded).unwrap();
    assert_eq!(
        json,
        r#"{"@state":":broker_wait","@history":[":init","manual"]}"#
    );

    let read_back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(decode_symbols_in_hash(&read_back), tree);
}

#[test]
fn test_symbol_keys_are_not_rewritten() {
    let tree = value!({ ":looks_like_symbol": ":value" });
    let decoded = decode_symbols_in_hash(&tree);
    assert_eq!(
        decoded.get(":looks_like_symbol"),
        Some(&Value::symbol("value"))
    );
}

#[test]
fn test_sanitize_then_normalize() {
    let stored = document(vec![
        ("@name", Value::from("node01")),
        ("@meta", Value::Document(document(vec![("@rack", Value::from("r4"))]))),
    ]);

    let clean = sanitize_hash(&bson_ordered_hash_to_hash(&stored));
    let keys: Vec<_> = clean.keys().cloned().collect();
    assert_eq!(keys, vec!["name", "meta"]);
    // nested keys are left as they are
    assert_eq!(
        clean.get("meta").and_then(|m| m.get("@rack")),
        Some(&Value::from("r4"))
    );
}

#[derive(Debug, Default)]
struct Policy {
    label: String,
    line_number: i64,
    maximum: i64,
}

impl Marshal for Policy {
    fn fields(&self) -> Vec<(&str, Field<'_>)> {
        vec![
            ("@classname", Field::value("ProjectHanlon::Policy")),
            ("@label", Field::value(self.label.as_str())),
            ("@line_number", Field::value(self.line_number)),
            ("@maximum", Field::value(self.maximum)),
        ]
    }

    fn set_field(&mut self, name: &str, value: Assigned) -> Result<()> {
        match name {
            "@label" => self.label = value.parse(name)?,
            "@line_number" => self.line_number = value.parse(name)?,
            "@maximum" => self.maximum = value.parse(name)?,
            _ => {}
        }
        Ok(())
    }
}

#[test]
fn test_new_from_stored_document() {
    let stored = document(vec![
        ("_id", Value::from("51a0")),
        ("@classname", Value::from("ProjectHanlon::Policy")),
        ("@label", Value::from("default")),
        ("@line_number", Value::from(2)),
        ("@maximum", Value::from(0)),
    ]);

    let policy: Policy = new_from_hash(&stored, &TypeRegistry::new()).unwrap();
    assert_eq!(policy.label, "default");
    assert_eq!(policy.line_number, 2);

    let hash: Map = policy.to_hash();
    assert!(!hash.contains_key("_id"));
    assert_eq!(hash.len(), 4);
}
