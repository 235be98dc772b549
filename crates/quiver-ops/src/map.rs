//! Element-wise transforms: `map`, `pluck`, `curtail`, `expand`.

use quiver_core::{Key, Map, Value};

use crate::field::field_of;
use crate::object::mixin;

/// `out[i] = f(&seq[i], i)`.
pub fn map<T, U, F>(mut f: F, seq: &[T]) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    let mut res = Vec::with_capacity(seq.len());
    for (i, item) in seq.iter().enumerate() {
        res.push(f(item, i));
    }
    res
}

/// The `key` field of every element, `Absent` where missing.
pub fn pluck(key: &Key, seq: &[Value]) -> Vec<Value> {
    map(|item, _| field_of(key, item), seq)
}

/// Concatenate the sequences `f` returns for each element and index.
pub fn curtail<T, U, F>(mut f: F, seq: &[T]) -> Vec<U>
where
    F: FnMut(&T, usize) -> Vec<U>,
{
    let mut acc = Vec::new();
    for (i, item) in seq.iter().enumerate() {
        acc.extend(f(item, i));
    }
    acc
}

/// Merge `f(d)` into each element `d`. Fields from `f` win.
/// Non-mapping elements contribute no fields of their own.
pub fn expand<F>(mut f: F, seq: &[Value]) -> Vec<Value>
where
    F: FnMut(&Value) -> Map,
{
    let empty = Map::new();
    map(
        |d, _| {
            let extra = f(d);
            Value::Map(mixin(d.as_map().unwrap_or(&empty), &extra))
        },
        seq,
    )
}
