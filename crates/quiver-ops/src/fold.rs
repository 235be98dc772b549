//! Reductions over sequences (`fold`) and mappings (`taper`).

use quiver_core::{Map, Value};

/// Left-to-right reduction: `acc = f(acc, &seq[i])`.
pub fn fold<T, A, F>(mut f: F, acc: A, seq: &[T]) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = acc;
    for item in seq {
        acc = f(acc, item);
    }
    acc
}

/// Reduction over a mapping in its order: `acc = f(acc, value, key)`.
pub fn taper<A, F>(mut f: F, acc: A, obj: &Map) -> A
where
    F: FnMut(A, &Value, &str) -> A,
{
    let mut acc = acc;
    for (key, value) in obj {
        acc = f(acc, value, key);
    }
    acc
}
