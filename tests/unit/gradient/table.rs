use super::*;
use serde_json::json;

fn stops(p: serde_json::Value, k: serde_json::Value) -> GradientStops {
    GradientStops {
        positions: Some(p),
        keyframes: Some(k),
    }
}

#[test]
fn extracts_named_gradients_of_both_kinds() {
    let doc = json!({"shapes": [
        {"ty": "gf", "nm": "A", "g": {"p": 2, "k": {"a": 0, "k": [0, 1, 0, 0]}}},
        {"ty": "gs", "nm": "B", "g": {"p": 3, "k": {"a": 1, "k": [{"t": 0}]}}},
        {"ty": "fl", "nm": "C", "g": {"p": 9, "k": 9}}
    ]});
    let table = extract_gradients(&doc).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("A"), Some(&stops(json!(2), json!({"a": 0, "k": [0, 1, 0, 0]}))));
    assert_eq!(table.get("B"), Some(&stops(json!(3), json!({"a": 1, "k": [{"t": 0}]}))));
    assert!(!table.contains("C"));
}

#[test]
fn last_scanned_duplicate_wins() {
    let doc = json!([
        {"ty": "gf", "nm": "X", "g": {"p": 1, "k": "first"}},
        {"nested": {"ty": "gs", "nm": "X", "g": {"p": 2, "k": "second"}}}
    ]);
    let table = extract_gradients(&doc).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("X"), Some(&stops(json!(2), json!("second"))));
}

#[test]
fn unnamed_or_payloadless_nodes_are_skipped() {
    let doc = json!([
        {"ty": "gf", "g": {"p": 1, "k": 1}},
        {"ty": "gf", "nm": "", "g": {"p": 1, "k": 1}},
        {"ty": "gf", "nm": 5, "g": {"p": 1, "k": 1}},
        {"ty": "gf", "nm": "nopayload"},
        {"ty": "gs", "nm": "nullpayload", "g": null},
        {"ty": "gs", "nm": "scalarpayload", "g": 4}
    ]);
    assert!(extract_gradients(&doc).unwrap().is_empty());
}

#[test]
fn partial_payload_keeps_absent_fields_absent() {
    let doc = json!([{"ty": "gf", "nm": "P", "g": {"k": [1, 2]}}]);
    let table = extract_gradients(&doc).unwrap();
    let entry = table.get("P").unwrap();
    assert_eq!(entry.positions, None);
    assert_eq!(entry.keyframes, Some(json!([1, 2])));
}

#[test]
fn zero_gradients_give_empty_table() {
    let doc = json!({"layers": [{"shapes": [{"ty": "fl", "nm": "f"}]}]});
    assert!(extract_gradients(&doc).unwrap().is_empty());
}

#[test]
fn write_into_replaces_only_stop_fields() {
    let mut payload = json!({"p": 2, "k": "old", "extra": true});
    let payload = payload.as_object_mut().unwrap();
    stops(json!(4), json!("new")).write_into(payload);
    assert_eq!(serde_json::Value::Object(payload.clone()), json!({"p": 4, "k": "new", "extra": true}));

    GradientStops {
        positions: None,
        keyframes: Some(json!(0)),
    }
    .write_into(payload);
    assert_eq!(serde_json::Value::Object(payload.clone()), json!({"k": 0, "extra": true}));
}

#[test]
fn table_serializes_as_plain_mapping() {
    let mut table = GradientTable::new();
    table.insert("b", stops(json!(2), json!([0])));
    table.insert("a", GradientStops::default());
    let v = serde_json::to_value(&table).unwrap();
    assert_eq!(v, json!({"a": {}, "b": {"p": 2, "k": [0]}}));
    let back: GradientTable = serde_json::from_value(v).unwrap();
    assert_eq!(back, table);
    assert_eq!(table.names().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn scalar_root_is_invalid() {
    assert!(extract_gradients(&json!("x")).is_err());
}
