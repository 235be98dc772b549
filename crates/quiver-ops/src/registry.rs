//! Name → curried operation table for untyped callers.
//!
//! Arguments are `Value`s in data-last order, so a partially applied entry
//! can later receive the data it works on:
//!
//! ```
//! use quiver_ops::{Applied, Registry};
//! use quiver_core::Value;
//!
//! let reg = Registry::new();
//! let by_name = reg.get("pluck").unwrap().apply([Value::from("name")]).unwrap();
//! let Applied::Partial(by_name) = by_name else { unreachable!() };
//! let rows: Value = serde_json::json!([{"name": "a"}, {"name": "b"}]).into();
//! let names = by_name.apply([rows]).unwrap().into_value().unwrap();
//! assert_eq!(names, serde_json::json!(["a", "b"]).into());
//! ```

use std::collections::BTreeMap;

use quiver_core::{Error, Key, Map, Result, Value};

use crate::curry::{curry2, curry3, variadic, Curried};
use crate::mold::{matches_template, Predicate};
use crate::selector::Selector;

pub struct Registry {
    ops: BTreeMap<&'static str, Curried>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// A registry holding every builtin operation.
    pub fn new() -> Self {
        let mut reg = Self {
            ops: BTreeMap::new(),
        };
        reg.install_builtins();
        reg
    }

    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            ops: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, op: Curried) {
        self.ops.insert(op.name(), op);
    }

    pub fn get(&self, name: &str) -> Option<&Curried> {
        self.ops.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Operation names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.ops.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Curried> {
        self.ops.values()
    }

    fn install_builtins(&mut self) {
        self.register(curry2("field", |key, obj| {
            Ok(crate::field::field_of(&expect_key("field", key)?, obj))
        }));

        self.register(curry2("mold", |template, candidate| {
            Ok(Value::Bool(matches_template(template, candidate)))
        }));

        self.register(curry2("find", |template, seq| {
            let pred = Predicate::Template(template.clone());
            Ok(crate::filter::find(&pred, expect_list("find", seq)?)
                .cloned()
                .unwrap_or(Value::Absent))
        }));

        self.register(curry2("filter", |template, seq| {
            let pred = Predicate::Template(template.clone());
            Ok(Value::List(crate::filter::filter(
                &pred,
                expect_list("filter", seq)?,
            )))
        }));

        self.register(curry2("pluck", |key, seq| {
            let key = expect_key("pluck", key)?;
            Ok(Value::List(crate::map::pluck(&key, expect_list("pluck", seq)?)))
        }));

        self.register(curry2("sort", |sel, seq| {
            let sel = expect_selector("sort", sel)?;
            Ok(Value::List(crate::sort::sort(&sel, expect_list("sort", seq)?)))
        }));

        self.register(curry2("group", |sel, seq| {
            let sel = expect_selector("group", sel)?;
            Ok(Value::Map(crate::group::group(
                &sel,
                expect_list("group", seq)?,
            )))
        }));

        self.register(curry2("min", |sel, seq| {
            let sel = expect_selector("min", sel)?;
            Ok(crate::sort::min(&sel, expect_list("min", seq)?)
                .cloned()
                .unwrap_or(Value::Absent))
        }));

        self.register(curry2("max", |sel, seq| {
            let sel = expect_selector("max", sel)?;
            Ok(crate::sort::max(&sel, expect_list("max", seq)?)
                .cloned()
                .unwrap_or(Value::Absent))
        }));

        self.register(curry2("mapValues", |sel, obj| {
            let sel = expect_selector("mapValues", sel)?;
            Ok(Value::Map(crate::object::map_values(
                &sel,
                expect_map("mapValues", obj)?,
            )))
        }));

        self.register(curry2("mixin", |left, right| {
            Ok(Value::Map(crate::object::mixin(
                expect_map("mixin", left)?,
                expect_map("mixin", right)?,
            )))
        }));

        self.register(curry2("pick", |keys, obj| {
            let keys = expect_names("pick", keys)?;
            Ok(Value::Map(crate::object::pick(&keys, expect_map("pick", obj)?)))
        }));

        self.register(curry2("omit", |keys, obj| {
            let keys = expect_names("omit", keys)?;
            Ok(Value::Map(crate::object::omit(&keys, expect_map("omit", obj)?)))
        }));

        self.register(curry2("range", |from, to| {
            Ok(Value::List(crate::range::range(
                expect_number("range", from)?,
                expect_number("range", to)?,
            )?))
        }));

        self.register(curry3("amend", |right, join, left| {
            let (l_key, r_key) = expect_join_keys(join)?;
            Ok(Value::List(crate::join::amend(
                expect_list("amend", left)?,
                expect_list("amend", right)?,
                &l_key,
                r_key.as_ref(),
            )))
        }));

        self.register(variadic("lay", 1, 3, |args| {
            let end = expect_number("lay", &args[0])?;
            let start = optional_number("lay", args.get(1))?;
            let step = optional_number("lay", args.get(2))?;
            Ok(Value::List(crate::range::lay(end, start, step)?))
        }));

        self.register(variadic("identity", 1, 1, |args| {
            Ok(crate::range::identity(args[0].clone()))
        }));

        self.register(variadic("keys", 1, 1, |args| {
            let names = crate::object::keys(expect_map("keys", &args[0])?);
            Ok(Value::List(names.into_iter().map(Value::Str).collect()))
        }));

        self.register(variadic("unique", 1, 1, |args| {
            Ok(Value::List(crate::filter::unique(expect_list(
                "unique", &args[0],
            )?)))
        }));
    }
}

fn expect_list<'a>(op: &'static str, v: &'a Value) -> Result<&'a [Value]> {
    v.as_list()
        .ok_or_else(|| Error::type_mismatch(op, "list", v))
}

fn expect_map<'a>(op: &'static str, v: &'a Value) -> Result<&'a Map> {
    v.as_map().ok_or_else(|| Error::type_mismatch(op, "map", v))
}

fn expect_key(op: &'static str, v: &Value) -> Result<Key> {
    Key::from_value(v).ok_or_else(|| Error::type_mismatch(op, "key (string or index)", v))
}

fn expect_selector(op: &'static str, v: &Value) -> Result<Selector> {
    Selector::from_value(v).ok_or_else(|| Error::type_mismatch(op, "key selector", v))
}

fn expect_number(op: &'static str, v: &Value) -> Result<f64> {
    v.as_f64().ok_or_else(|| Error::type_mismatch(op, "number", v))
}

fn optional_number(op: &'static str, v: Option<&Value>) -> Result<Option<f64>> {
    match v {
        None => Ok(None),
        Some(v) if v.is_nullish() => Ok(None),
        Some(v) => expect_number(op, v).map(Some),
    }
}

fn expect_names(op: &'static str, v: &Value) -> Result<Vec<String>> {
    let items = expect_list(op, v)?;
    items
        .iter()
        .map(|item| {
            expect_key(op, item).map(|k| k.as_name().into_owned())
        })
        .collect()
}

/// `"id"` joins on the same key; `["lKey", "rKey"]` on distinct ones.
fn expect_join_keys(v: &Value) -> Result<(Key, Option<Key>)> {
    match v {
        Value::List(pair) => match pair.as_slice() {
            [l] => Ok((expect_key("amend", l)?, None)),
            [l, r] => Ok((expect_key("amend", l)?, Some(expect_key("amend", r)?))),
            _ => Err(Error::type_mismatch("amend", "one or two join keys", v)),
        },
        other => Ok((expect_key("amend", other)?, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curry::Applied;
    use serde_json::json;

    fn v(j: serde_json::Value) -> Value {
        Value::from(j)
    }

    fn call(reg: &Registry, name: &str, args: Vec<Value>) -> Result<Applied> {
        reg.get(name).expect("registered").apply(args)
    }

    #[test]
    fn every_builtin_rejects_zero_args() {
        let reg = Registry::new();
        for op in reg.iter() {
            assert!(
                matches!(op.apply(Vec::new()), Err(Error::NoArgs)),
                "{} accepted zero args",
                op.name()
            );
        }
    }

    #[test]
    fn field_works_partially_and_fully() {
        let reg = Registry::new();
        let obj = v(json!({"x": 100}));
        let full = call(&reg, "field", vec![Value::from("x"), obj.clone()]).unwrap();
        assert_eq!(full.into_value(), Some(Value::Int(100)));

        let Applied::Partial(get_x) = call(&reg, "field", vec![Value::from("x")]).unwrap() else {
            panic!("expected a partial");
        };
        assert_eq!(get_x.apply([obj]).unwrap().into_value(), Some(Value::Int(100)));
        assert_eq!(
            get_x.apply([v(json!({}))]).unwrap().into_value(),
            Some(Value::Absent)
        );
    }

    #[test]
    fn sort_group_and_filter_through_registry() {
        let reg = Registry::new();
        let rows = v(json!([{"a": 3, "t": "x"}, {"a": 1, "t": "y"}, {"a": 2, "t": "x"}]));

        let sorted = call(&reg, "sort", vec![Value::from("-a"), rows.clone()]).unwrap();
        assert_eq!(
            sorted.into_value(),
            Some(v(json!([{"a": 3, "t": "x"}, {"a": 2, "t": "x"}, {"a": 1, "t": "y"}])))
        );

        let grouped = call(&reg, "group", vec![Value::from("t"), rows.clone()]).unwrap();
        let grouped = grouped.into_value().unwrap();
        assert_eq!(grouped.as_map().unwrap().len(), 2);

        let filtered = call(&reg, "filter", vec![v(json!({"t": "y"})), rows]).unwrap();
        assert_eq!(filtered.into_value(), Some(v(json!([{"a": 1, "t": "y"}]))));
    }

    #[test]
    fn amend_accepts_key_pairs() {
        let reg = Registry::new();
        let left = v(json!([{"team": 1, "who": "ann"}]));
        let right = v(json!([{"id": 1, "name": "red"}]));
        let out = call(&reg, "amend", vec![right, v(json!(["team", "id"])), left]).unwrap();
        assert_eq!(
            out.into_value(),
            Some(v(json!([{"team": 1, "who": "ann", "id": 1, "name": "red"}])))
        );
    }

    #[test]
    fn min_on_empty_is_absent() {
        let reg = Registry::new();
        let out = call(&reg, "min", vec![Value::from("x"), v(json!([]))]).unwrap();
        assert_eq!(out.into_value(), Some(Value::Absent));
    }

    #[test]
    fn lay_takes_optional_arguments() {
        let reg = Registry::new();
        let out = call(&reg, "lay", vec![Value::Int(53), Value::Int(50)]).unwrap();
        assert_eq!(out.into_value(), Some(v(json!([50, 51, 52]))));
        let out = call(&reg, "lay", vec![Value::Int(3)]).unwrap();
        assert_eq!(out.into_value(), Some(v(json!([0, 1, 2]))));
    }

    #[test]
    fn huge_sequences_fail_instead_of_allocating() {
        let reg = Registry::new();
        let err = call(&reg, "range", vec![Value::Int(0), Value::Float(1e300)]).unwrap_err();
        assert!(matches!(err, Error::TooLong { op: "range", .. }));
        let err = call(&reg, "lay", vec![Value::Float(1e300)]).unwrap_err();
        assert!(matches!(err, Error::TooLong { op: "lay", .. }));
    }

    #[test]
    fn wrong_container_is_a_type_error() {
        let reg = Registry::new();
        let err = call(&reg, "pluck", vec![Value::from("a"), Value::Int(3)]).unwrap_err();
        assert!(matches!(
            err,
            Error::Type {
                op: "pluck",
                expected: "list",
                found: "int"
            }
        ));
    }

    #[test]
    fn names_are_sorted() {
        let names = Registry::new().names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"mapValues"));
    }
}
