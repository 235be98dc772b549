//! Curried operations and the name-addressed registry

mod common;

use common::{characters, teams, v};
use quiver_core::{Error, Value};
use quiver_ops::{curry2, curry3, Applied, Curried, Registry};
use serde_json::json;

fn step(a: Applied, args: Vec<Value>) -> Applied {
    match a {
        Applied::Partial(p) => p.apply(args).unwrap(),
        done => panic!("already saturated: {done:?}"),
    }
}

fn concat3() -> Curried {
    curry3("concat3", |a, b, c| {
        Ok(Value::Str(format!("{}{}{}", a.key_string(), b.key_string(), c.key_string())))
    })
}

#[test]
fn test_no_args_fails_for_every_arity() {
    let pair = curry2("pair", |a, b| Ok(Value::List(vec![a.clone(), b.clone()])));
    assert!(matches!(pair.apply(Vec::new()), Err(Error::NoArgs)));
    assert!(matches!(concat3().apply(Vec::new()), Err(Error::NoArgs)));

    let reg = Registry::new();
    for name in reg.names() {
        let op = reg.get(name).unwrap();
        assert!(matches!(op.apply(Vec::new()), Err(Error::NoArgs)), "{name}");
    }
}

#[test]
fn test_every_split_of_three_arguments_agrees() {
    let a = || Value::from("a");
    let b = || Value::from("b");
    let c = || Value::from("c");
    let expected = Some(Value::from("abc"));

    let all = concat3().apply(vec![a(), b(), c()]).unwrap();
    assert_eq!(all.into_value(), expected);

    let one_two = step(concat3().apply(vec![a()]).unwrap(), vec![b(), c()]);
    assert_eq!(one_two.into_value(), expected);

    let two_one = step(concat3().apply(vec![a(), b()]).unwrap(), vec![c()]);
    assert_eq!(two_one.into_value(), expected);

    let one_one_one = step(step(concat3().apply(vec![a()]).unwrap(), vec![b()]), vec![c()]);
    assert_eq!(one_one_one.into_value(), expected);
}

#[test]
fn test_partials_are_reusable() {
    let Applied::Partial(by_team) = Registry::new()
        .get("group")
        .unwrap()
        .apply([Value::from("team")])
        .unwrap()
    else {
        panic!("expected a partial");
    };

    let first = by_team.apply([Value::List(characters())]).unwrap();
    let second = by_team.apply([Value::List(characters())]).unwrap();
    assert_eq!(first.into_value(), second.into_value());
    assert!(by_team.bound().len() == 1);
}

#[test]
fn test_registry_amend_is_data_last() {
    let reg = Registry::new();
    let amend = reg.get("amend").unwrap();
    assert_eq!(amend.arity(), 3);

    let with_teams = amend
        .apply([Value::List(teams()), v(json!(["team", "id"]))])
        .unwrap();
    let out = step(with_teams, vec![Value::List(characters())]);
    let cities = reg
        .get("pluck")
        .unwrap()
        .apply([Value::from("city"), out.into_value().unwrap()])
        .unwrap();
    assert_eq!(
        cities.into_value(),
        Some(v(json!(["Bedrock", "Rockvegas", "Bedrock"])))
    );
}

#[test]
fn test_registry_type_errors_name_the_op() {
    let reg = Registry::new();
    let err = reg
        .get("mixin")
        .unwrap()
        .apply([v(json!({"a": 1})), Value::Int(2)])
        .unwrap_err();
    assert_eq!(err.to_string(), "mixin: expected map, found int");
}

#[test]
fn test_registry_lists_known_ops() {
    let names = Registry::new().names();
    for expected in [
        "amend", "field", "filter", "find", "group", "identity", "keys", "lay", "mapValues",
        "max", "min", "mixin", "mold", "omit", "pick", "pluck", "range", "sort", "unique",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }
}

#[test]
fn test_mold_through_registry_returns_bool() {
    let reg = Registry::new();
    let out = reg
        .get("mold")
        .unwrap()
        .apply([v(json!({"id": "7"})), v(json!({"id": 7, "x": 1}))])
        .unwrap();
    assert_eq!(out.into_value(), Some(Value::Bool(true)));
}
