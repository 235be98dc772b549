//! Number sequences and `identity`.

use quiver_core::{Error, Result, Value};

/// Largest sequence `range` and `lay` will materialize.
pub const MAX_SEQUENCE_LEN: usize = 10_000_000;

/// `[from, from + 1, ...]` while below `to`. Empty when `from >= to` or
/// either bound is not finite; `Error::TooLong` past [`MAX_SEQUENCE_LEN`].
pub fn range(from: f64, to: f64) -> Result<Vec<Value>> {
    if !(from.is_finite() && to.is_finite()) || from >= to {
        return Ok(Vec::new());
    }
    sequence("range", from, 1.0, to - from)
}

/// Numbers from `start` (default 0) toward `end` (exclusive) by `step`
/// (default 1). Positive steps count up, negative steps count down, a zero
/// step yields nothing.
///
/// ```
/// use quiver_ops::lay;
/// use quiver_core::Value;
///
/// assert_eq!(lay(5.0, None, None).unwrap(), [0, 1, 2, 3, 4].map(Value::from).to_vec());
/// assert_eq!(lay(53.0, Some(50.0), None).unwrap(), [50, 51, 52].map(Value::from).to_vec());
/// assert_eq!(lay(4.0, Some(8.0), Some(-1.0)).unwrap(), [8, 7, 6, 5].map(Value::from).to_vec());
/// ```
pub fn lay(end: f64, start: Option<f64>, step: Option<f64>) -> Result<Vec<Value>> {
    let start = start.filter(|s| !s.is_nan()).unwrap_or(0.0);
    let step = step.unwrap_or(1.0);
    if !(end.is_finite() && start.is_finite() && step.is_finite()) {
        return Ok(Vec::new());
    }

    let span = if step > 0.0 && start < end {
        (end - start) / step
    } else if step < 0.0 && start > end {
        (start - end) / -step
    } else {
        return Ok(Vec::new());
    };
    sequence("lay", start, step, span)
}

/// `start + k * step` for `k` in `0..ceil(span)`, where `span` is the
/// distance to the exclusive bound measured in steps.
fn sequence(op: &'static str, start: f64, step: f64, span: f64) -> Result<Vec<Value>> {
    let count = span.ceil();
    if !count.is_finite() || count > MAX_SEQUENCE_LEN as f64 {
        return Err(Error::TooLong {
            op,
            requested: count,
            limit: MAX_SEQUENCE_LEN,
        });
    }
    let count = count as usize;
    Ok((0..count)
        .map(|k| Value::number(start + k as f64 * step))
        .collect())
}

pub fn identity<T>(x: T) -> T {
    x
}
