//! Key join (`amend`).
//!
//! Each left element is merged with the first right element whose join field
//! loosely equals its own. Duplicate right matches are ignored; left elements
//! with no match come through unchanged.

use quiver_core::compare::loose_eq;
use quiver_core::{Key, Map, Value};

use crate::mold::Predicate;
use crate::object::mixin;
use crate::{filter::find, map::map};

/// Amend `left` rows with the fields of matching `right` rows.
///
/// `r_key` defaults to `l_key`. Right-hand fields win on conflict. The
/// output has the length and order of `left`.
pub fn amend(left: &[Value], right: &[Value], l_key: &Key, r_key: Option<&Key>) -> Vec<Value> {
    let r_key = r_key.unwrap_or(l_key);
    let empty = Map::new();

    map(
        |l, _| {
            let wanted = l.lookup(l_key);
            let found = find(&matching(r_key, wanted), right);
            let base = l.as_map().unwrap_or(&empty);
            let extra = found.and_then(Value::as_map).unwrap_or(&empty);
            Value::Map(mixin(base, extra))
        },
        left,
    )
}

fn matching(r_key: &Key, wanted: Value) -> Predicate {
    let r_key = r_key.clone();
    Predicate::func(move |r| loose_eq(&wanted, &r.lookup(&r_key)))
}
