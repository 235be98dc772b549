//! End-to-end examples for the typed collection operations

mod common;

use common::{characters, list, obj, teams, v};
use quiver_core::{Key, Value};
use quiver_ops::{
    abate, amend, collect, curtail, expand, field, filter, find, fold, group, identity, keys,
    lay, map, map_values, max, min, mixin, mold, omit, pick, pluck, range, sort, taper, unique,
    Predicate, Selector,
};
use serde_json::json;

#[test]
fn test_field_accessor_partial_and_full() {
    let get_x = field("x");
    assert_eq!(get_x(&v(json!({"x": 100}))), Value::Int(100));
    assert_eq!(get_x(&v(json!({"y": 1}))), Value::Absent);
    assert_eq!(
        quiver_ops::field_of(&Key::Index(1), &v(json!(["a", "b"]))),
        Value::from("b")
    );
}

#[test]
fn test_mold_and_filter_by_template() {
    let rows = list(json!([{"a": 1}, {"a": 2}, {"a": 3}]));
    assert_eq!(
        filter(&Predicate::from(v(json!({"a": 2}))), &rows),
        list(json!([{"a": 2}]))
    );

    let template = v(json!({"active": true}));
    let active = mold(&template);
    let names: Vec<_> = characters()
        .iter()
        .filter(|c| active(*c))
        .map(|c| c.lookup(&Key::from("name")))
        .collect();
    assert_eq!(names, list(json!(["barney", "pebbles"])));
}

#[test]
fn test_filter_with_function_predicate() {
    let adults = Predicate::func(|c| c.lookup(&Key::from("age")).to_number() >= 18.0);
    assert_eq!(filter(&adults, &characters()).len(), 2);
    let first = find(&adults, &characters()[..]).cloned();
    assert_eq!(
        first.map(|c| c.lookup(&Key::from("name"))),
        Some(Value::from("barney"))
    );
}

#[test]
fn test_map_fold_and_curtail() {
    let squares = map(|x: &Value, _| Value::number(x.to_number().powi(2)), &list(json!([1, 2, 3])));
    assert_eq!(squares, list(json!([1, 4, 9])));

    let sum = fold(|acc, x: &Value| acc + x.to_number(), 0.0, &list(json!([1, 2, 3, 4])));
    assert_eq!(sum, 10.0);

    let repeated = curtail(|x: &i32, i| vec![*x; i], &[5, 6, 7]);
    assert_eq!(repeated, vec![6, 7, 7]);
}

#[test]
fn test_expand_flattens_mapping_results() {
    let out = expand(
        |row| {
            let mut m = quiver_core::Map::new();
            m.insert("n".into(), row.clone());
            m
        },
        &list(json!([1, 2])),
    );
    assert_eq!(out, list(json!([{"n": 1}, {"n": 2}])));
}

#[test]
fn test_pluck_sort_and_group() {
    assert_eq!(
        pluck(&Key::from("name"), &characters()),
        list(json!(["barney", "fred", "pebbles"]))
    );

    let by_age = sort(&Selector::from("age"), &characters());
    assert_eq!(
        pluck(&Key::from("name"), &by_age),
        list(json!(["pebbles", "barney", "fred"]))
    );

    let floor = Selector::func(|x| Value::number(x.to_number().floor()));
    let grouped = group(&floor, &list(json!([4.2, 6.1, 6.4])));
    assert_eq!(Value::Map(grouped), v(json!({"4": [4.2], "6": [6.1, 6.4]})));
}

#[test]
fn test_min_max_examples() {
    let xs = list(json!([{"x": 3}, {"x": 1}, {"x": 2}]));
    let x = Selector::func(|d| d.lookup(&Key::from("x")));
    assert_eq!(min(&x, &xs), Some(&v(json!({"x": 1}))));
    assert_eq!(max(&x, &xs), Some(&v(json!({"x": 3}))));
    assert_eq!(min(&x, &[]), None);
}

#[test]
fn test_object_helpers() {
    let o = obj(json!({"a": 1, "b": 2, "c": 3, "d": 4}));
    let ks = ["a", "d"];
    assert_eq!(pick(&ks, &o), obj(json!({"a": 1, "d": 4})));
    assert_eq!(omit(&ks, &o), obj(json!({"b": 2, "c": 3})));
    assert_eq!(mixin(&pick(&ks, &o), &omit(&ks, &o)), o);
    assert_eq!(keys(&o), vec!["a", "b", "c", "d"]);

    let doubled = map_values(&Selector::func(|n| Value::number(n.to_number() * 2.0)), &o);
    assert_eq!(doubled, obj(json!({"a": 2, "b": 4, "c": 6, "d": 8})));

    let labels = collect(|val, key| format!("{key}={val}"), &o);
    assert_eq!(labels, vec!["a=1", "b=2", "c=3", "d=4"]);

    let total = taper(|acc, val, _| acc + val.to_number(), 0.0, &o);
    assert_eq!(total, 10.0);

    let spread = abate(|val, key| vec![key.to_string(); val.to_number() as usize], &o);
    assert_eq!(spread.len(), 10);
}

#[test]
fn test_amend_joins_teams() {
    let out = amend(
        &characters(),
        &teams(),
        &Key::from("team"),
        Some(&Key::from("id")),
    );
    assert_eq!(out.len(), 3);
    assert_eq!(
        pluck(&Key::from("city"), &out),
        list(json!(["Bedrock", "Rockvegas", "Bedrock"]))
    );

    let left = list(json!([{"id": 1, "b": 2}, {"id": 2, "b": 2}]));
    let right = list(json!([{"id": 1, "d": 4}, {"id": 2, "d": 5}]));
    assert_eq!(
        amend(&left, &right, &Key::from("id"), None),
        list(json!([{"id": 1, "b": 2, "d": 4}, {"id": 2, "b": 2, "d": 5}]))
    );
}

#[test]
fn test_ranges_unique_identity() {
    assert_eq!(range(1.0, 4.0).unwrap(), list(json!([1, 2, 3])));
    assert_eq!(lay(10.0, Some(0.0), Some(5.0)).unwrap(), list(json!([0, 5])));
    assert_eq!(
        unique(&list(json!([1, 1.0, "1", {"a": 1}, {"a": 1}]))),
        list(json!([1, "1", {"a": 1}]))
    );
    assert_eq!(identity(v(json!([1]))), v(json!([1])));
}
