//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use quiver_core::{Map, Value};
use serde_json::json;

pub fn v(j: serde_json::Value) -> Value {
    Value::from(j)
}

pub fn list(j: serde_json::Value) -> Vec<Value> {
    match Value::from(j) {
        Value::List(items) => items,
        other => vec![other],
    }
}

pub fn obj(j: serde_json::Value) -> Map {
    match Value::from(j) {
        Value::Map(m) => m,
        other => panic!("expected a map, got {other}"),
    }
}

pub fn characters() -> Vec<Value> {
    list(json!([
        {"name": "barney", "age": 36, "active": true, "team": 1},
        {"name": "fred", "age": 40, "active": false, "team": 2},
        {"name": "pebbles", "age": 1, "active": true, "team": 1}
    ]))
}

pub fn teams() -> Vec<Value> {
    list(json!([
        {"id": 1, "city": "Bedrock"},
        {"id": 2, "city": "Rockvegas"}
    ]))
}

/// A record per `(id, age)` pair, named `p<id>`.
pub fn people(pairs: &[(i64, i64)]) -> Vec<Value> {
    pairs
        .iter()
        .map(|(id, age)| v(json!({"id": id, "age": age, "name": format!("p{id}")})))
        .collect()
}
