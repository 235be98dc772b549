//! Grouping by selector.

use indexmap::IndexMap;
use quiver_core::{Map, Value};

use crate::selector::Selector;

/// Partition `seq` by the mapping-key rendering of the resolved selector.
///
/// Groups appear in the order their key is first seen; each group keeps the
/// relative order of its elements.
pub fn group(sel: &Selector, seq: &[Value]) -> Map {
    let key_of = sel.resolve();
    let mut groups: IndexMap<String, Vec<Value>> = IndexMap::new();
    for item in seq {
        groups
            .entry(key_of(item).key_string())
            .or_default()
            .push(item.clone());
    }
    groups
        .into_iter()
        .map(|(key, members)| (key, Value::List(members)))
        .collect()
}
