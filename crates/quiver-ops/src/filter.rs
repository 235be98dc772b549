//! Selection: `filter`, `find`, `unique`.

use std::collections::HashSet;

use quiver_core::hash::hash_value;
use quiver_core::Value;

use crate::mold::Predicate;

/// Elements for which the resolved predicate holds, in input order.
pub fn filter(pred: &Predicate, seq: &[Value]) -> Vec<Value> {
    let keep = pred.resolve();
    seq.iter().filter(|&item| keep(item)).cloned().collect()
}

/// First element for which the resolved predicate holds.
pub fn find<'a>(pred: &Predicate, seq: &'a [Value]) -> Option<&'a Value> {
    let hit = pred.resolve();
    seq.iter().find(|&item| hit(item))
}

/// First occurrence of each structurally distinct element, in input order.
pub fn unique(seq: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(seq.len());
    let mut result = Vec::new();
    for item in seq {
        if seen.insert(hash_value(item)) {
            result.push(item.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn list(j: serde_json::Value) -> Vec<Value> {
        match Value::from(j) {
            Value::List(items) => items,
            other => vec![other],
        }
    }

    #[test]
    fn filter_by_function() {
        let is_even = Predicate::func(|n| n.to_number() % 2.0 == 0.0);
        assert_eq!(filter(&is_even, &list(json!([1, 2, 3, 4]))), list(json!([2, 4])));
    }

    #[test]
    fn filter_by_template() {
        let xs = list(json!([{"a": 1}, {"a": 2}, {"a": 3}]));
        let only_two = Predicate::from(Value::from(json!({"a": 2})));
        assert_eq!(filter(&only_two, &xs), list(json!([{"a": 2}])));
    }

    #[test]
    fn find_returns_first_match_or_none() {
        let xs = list(json!([{"a": 1}, {"a": 2, "n": 1}, {"a": 2, "n": 2}]));
        let hit = find(&Predicate::from(Value::from(json!({"a": 2}))), &xs);
        assert_eq!(hit, Some(&Value::from(json!({"a": 2, "n": 1}))));
        assert!(find(&Predicate::from(Value::from(json!({"a": 4}))), &xs).is_none());
    }

    #[test]
    fn unique_keeps_first_occurrences() {
        assert_eq!(unique(&list(json!([1, 1, 2, 1]))), list(json!([1, 2])));
        assert_eq!(unique(&list(json!([1, "1"]))), list(json!([1, "1"])));
        assert_eq!(unique(&list(json!([{}, {}]))), list(json!([{}])));
    }

    #[test]
    fn unique_separates_numbers_beyond_float_precision() {
        let xs = vec![Value::Int((1 << 53) + 1), Value::Float(9_007_199_254_740_992.0)];
        assert_eq!(unique(&xs).len(), 2);
    }
}
