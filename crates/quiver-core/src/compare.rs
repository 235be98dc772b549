//! Ordering and equality over `Value`.
//!
//! `value_cmp` is a total order used by `sort`; `loose_cmp` is the coercing
//! relational comparison behind `min` and `max`.
//! `loose_eq` is the permissive equality used by shape templates and joins.

use std::cmp::Ordering;

use crate::value::{Map, Value};

/// Compare two values for sorting.
///
/// Absent sorts first, then null, then values by type rank. Numbers compare
/// numerically across `Int`/`Float`, with NaN after every other number.
pub fn value_cmp(a: &Value, b: &Value) -> Ordering {
    use Value::*;

    match (a, b) {
        (Int(_) | Float(_), Int(_) | Float(_)) => match number_cmp(a, b) {
            Some(ord) => ord,
            None => is_nan(a).cmp(&is_nan(b)),
        },
        (Bool(x), Bool(y)) => x.cmp(y),
        (Str(x), Str(y)) => x.cmp(y),
        (List(x), List(y)) => list_cmp(x, y),
        (Map(x), Map(y)) => map_cmp(x, y),
        // Mixed types (and the nullish pairs): order by type rank
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn list_cmp(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match value_cmp(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

fn map_cmp(a: &Map, b: &Map) -> Ordering {
    for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
        match ka.cmp(kb).then_with(|| value_cmp(va, vb)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Exact ordering of two numbers, `Int` against `Float` included.
/// `None` when either side is NaN or not a number.
pub fn number_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    use Value::*;

    match (a, b) {
        (Int(x), Int(y)) => Some(x.cmp(y)),
        (Int(x), Float(y)) => int_float_cmp(*x, *y),
        (Float(x), Int(y)) => int_float_cmp(*y, *x).map(Ordering::reverse),
        (Float(x), Float(y)) => x.partial_cmp(y),
        _ => None,
    }
}

fn int_float_cmp(i: i64, f: f64) -> Option<Ordering> {
    // 2^63; every finite float below it and at or above -2^63 truncates into i64.
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    if f >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if f < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    let frac = f - whole;
    Some(i.cmp(&(whole as i64)).then_with(|| {
        if frac > 0.0 {
            Ordering::Less
        } else if frac < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }))
}

fn is_nan(v: &Value) -> bool {
    matches!(v, Value::Float(f) if f.is_nan())
}

/// Relational comparison with coercion, as `<`/`>` behave on loose values.
///
/// - two strings compare lexicographically;
/// - two numbers compare exactly;
/// - any other mix of null, bool, number and string compares after
///   `Value::to_number`;
/// - `Absent`, lists, maps and NaN are unordered (`None`).
pub fn loose_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    use Value::*;

    match (a, b) {
        (Str(x), Str(y)) => Some(x.cmp(y)),
        (Int(_) | Float(_), Int(_) | Float(_)) => number_cmp(a, b),
        (Null | Bool(_) | Int(_) | Float(_) | Str(_), Null | Bool(_) | Int(_) | Float(_) | Str(_)) => {
            a.to_number().partial_cmp(&b.to_number())
        }
        _ => None,
    }
}

/// Assign a numeric rank to value kinds for mixed-type comparisons.
pub(crate) fn type_rank(v: &Value) -> u8 {
    use Value::*;
    match v {
        Absent => 0,
        Null => 1,
        Bool(_) => 2,
        Int(_) | Float(_) => 3,
        Str(_) => 4,
        List(_) => 5,
        Map(_) => 6,
    }
}

/// Loose equality.
///
/// Normalization rules, applied to the pair:
/// 1. `Absent` and `Null` equal each other and themselves, nothing else.
/// 2. Numbers compare numerically; NaN equals nothing.
/// 3. A number, string or bool against a different one of those kinds:
///    both sides are coerced with `Value::to_number`.
/// 4. Two strings or two bools compare exactly.
/// 5. Lists compare element-wise, maps by key set then per-key, both loosely.
/// 6. Every other pairing is unequal.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    use Value::*;

    match (a, b) {
        (Absent | Null, Absent | Null) => true,
        (Absent | Null, _) | (_, Absent | Null) => false,
        (Str(x), Str(y)) => x == y,
        (Bool(x), Bool(y)) => x == y,
        (Int(_) | Float(_), Int(_) | Float(_)) => number_cmp(a, b) == Some(Ordering::Equal),
        (Int(_) | Float(_) | Str(_) | Bool(_), Int(_) | Float(_) | Str(_) | Bool(_)) => {
            a.to_number() == b.to_number()
        }
        (List(x), List(y)) => x.len() == y.len() && x.iter().zip(y).all(|(p, q)| loose_eq(p, q)),
        (Map(x), Map(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).map(|w| loose_eq(v, w)).unwrap_or(false))
        }
        _ => false,
    }
}
