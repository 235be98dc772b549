//! Ordering operations: `sort`, `min`, `max`.

use std::cmp::Ordering;

use quiver_core::compare::{loose_cmp, value_cmp};
use quiver_core::Value;

use crate::selector::Selector;

/// Stable ascending sort by the resolved key.
///
/// A key selector written `"-field"` sorts by the negated field, i.e.
/// descending for numeric fields.
pub fn sort(sel: &Selector, seq: &[Value]) -> Vec<Value> {
    let key_of = sel.resolve_sort();

    // Build (sort_key, index) pairs, then sort on the key only
    let mut keyed: Vec<(Value, usize)> = seq
        .iter()
        .enumerate()
        .map(|(idx, item)| (key_of(item), idx))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| value_cmp(a, b));

    keyed.into_iter().map(|(_, idx)| seq[idx].clone()).collect()
}

/// Element with the strictly smallest resolved key; the first one wins ties.
/// `None` for an empty sequence.
pub fn min<'a>(sel: &Selector, seq: &'a [Value]) -> Option<&'a Value> {
    extreme(sel, seq, Ordering::Less)
}

/// Element with the strictly largest resolved key; the first one wins ties.
/// `None` for an empty sequence.
pub fn max<'a>(sel: &Selector, seq: &'a [Value]) -> Option<&'a Value> {
    extreme(sel, seq, Ordering::Greater)
}

/// Pairwise scan starting from the first element, comparing keys with
/// `loose_cmp`: null, bool and numeric-string keys coerce to numbers, two
/// strings compare as text. Unordered keys (absent, NaN, lists, maps,
/// non-numeric text against numbers) never displace the pick, and nothing
/// displaces an unordered pick.
fn extreme<'a>(sel: &Selector, seq: &'a [Value], wanted: Ordering) -> Option<&'a Value> {
    let key_of = sel.resolve();
    let (first, rest) = seq.split_first()?;

    let mut item = first;
    let mut best = key_of(first);
    for candidate in rest {
        let current = key_of(candidate);
        if loose_cmp(&current, &best) == Some(wanted) {
            item = candidate;
            best = current;
        }
    }
    Some(item)
}
