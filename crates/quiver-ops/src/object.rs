//! Mapping operations.

use quiver_core::{Map, Value};

use crate::selector::Selector;

/// One result of `f(value, key)` per entry, in mapping order.
pub fn collect<U, F>(mut f: F, obj: &Map) -> Vec<U>
where
    F: FnMut(&Value, &str) -> U,
{
    obj.iter().map(|(key, value)| f(value, key)).collect()
}

/// Same keys, each value replaced by the resolved selector applied to it.
pub fn map_values(sel: &Selector, obj: &Map) -> Map {
    let apply = sel.resolve();
    obj.iter()
        .map(|(key, value)| (key.clone(), apply(value)))
        .collect()
}

/// Shallow merge into a new mapping; keys of `right` overwrite `left`.
pub fn mixin(left: &Map, right: &Map) -> Map {
    let mut res = left.clone();
    for (key, value) in right {
        res.insert(key.clone(), value.clone());
    }
    res
}

/// Concatenate the sequences `f(value, key)` returns, in mapping order.
pub fn abate<U, F>(mut f: F, obj: &Map) -> Vec<U>
where
    F: FnMut(&Value, &str) -> Vec<U>,
{
    let mut res = Vec::new();
    for (key, value) in obj {
        res.extend(f(value, key));
    }
    res
}

/// Only the listed keys that exist in `obj`, in `keys` order.
pub fn pick<K: AsRef<str>>(keys: &[K], obj: &Map) -> Map {
    let mut res = Map::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(value) = obj.get(key) {
            res.insert(key.to_string(), value.clone());
        }
    }
    res
}

/// Every entry whose key is not listed, in mapping order.
pub fn omit<K: AsRef<str>>(keys: &[K], obj: &Map) -> Map {
    obj.iter()
        .filter(|(key, _)| !keys.iter().any(|k| k.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Key names in mapping order.
pub fn keys(obj: &Map) -> Vec<String> {
    obj.keys().cloned().collect()
}
