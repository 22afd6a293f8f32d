use super::*;
use crate::gradient::table::GradientStops;
use serde_json::json;

fn table(names: &[&str]) -> GradientTable {
    let mut t = GradientTable::new();
    for n in names {
        t.insert(*n, GradientStops::default());
    }
    t
}

#[test]
fn dedupes_in_first_seen_order() {
    let target = json!({"shapes": [
        {"ty": "gf", "nm": "X"},
        {"ty": "gs", "nm": "Y"},
        {"it": [{"ty": "gf", "nm": "X"}]},
        {"ty": "gs", "nm": "Z"}
    ]});
    let names = restorable_names(&target, &table(&["X", "Z"])).unwrap();
    assert_eq!(names, ["X", "Z"]);
}

#[test]
fn order_follows_target_not_table() {
    let target = json!([{"ty": "gf", "nm": "b"}, {"ty": "gf", "nm": "a"}]);
    let names = restorable_names(&target, &table(&["a", "b"])).unwrap();
    assert_eq!(names, ["b", "a"]);
}

#[test]
fn only_gradient_nodes_count() {
    let target = json!([
        {"ty": "fl", "nm": "X"},
        {"nm": "X"},
        {"ty": "gf", "nm": 1},
        {"ty": "gf"}
    ]);
    assert!(restorable_names(&target, &table(&["X", "1"])).unwrap().is_empty());
}

#[test]
fn result_is_subset_of_table_and_target() {
    let target = json!([
        {"ty": "gf", "nm": "a"}, {"ty": "gs", "nm": "b"}, {"ty": "gf", "nm": "c"}
    ]);
    let t = table(&["b", "c", "d"]);
    let names = restorable_names(&target, &t).unwrap();
    assert_eq!(names, ["b", "c"]);
    assert!(names.iter().all(|n| t.contains(n)));
}

#[test]
fn empty_table_yields_nothing() {
    let target = json!([{"ty": "gf", "nm": "a"}]);
    assert!(restorable_names(&target, &GradientTable::new()).unwrap().is_empty());
}

#[test]
fn invalid_root_is_an_error() {
    assert!(restorable_names(&json!(false), &table(&["a"])).is_err());
}
