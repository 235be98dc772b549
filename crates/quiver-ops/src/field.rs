//! Field accessor.

use quiver_core::{Key, Value};

/// Returns a reader for `key`. Missing keys read as `Value::Absent`.
///
/// ```
/// use quiver_ops::field;
/// use quiver_core::Value;
///
/// let fifth = field(4usize);
/// let names: Value = serde_json::json!(["Bashful", "Doc", "Dopey", "Grumpy", "Happy"]).into();
/// assert_eq!(fifth(&names), Value::from("Happy"));
/// ```
pub fn field(key: impl Into<Key>) -> impl Fn(&Value) -> Value + Send + Sync + Clone {
    let key = key.into();
    move |container: &Value| container.lookup(&key)
}

/// Reads `key` from `container` immediately.
pub fn field_of(key: &Key, container: &Value) -> Value {
    container.lookup(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_present_and_absent_keys() {
        let x = field("x");
        assert_eq!(x(&json!({"x": 100}).into()), Value::Int(100));
        assert_eq!(x(&json!({}).into()), Value::Absent);
    }

    #[test]
    fn immediate_form_matches_deferred_form() {
        let obj: Value = json!({"name": "fred", "age": 40}).into();
        let key = Key::from("age");
        assert_eq!(field_of(&key, &obj), field("age")(&obj));
    }

    #[test]
    fn index_into_nested_lists() {
        let rows: Value = json!([[1, 2], [3, 4]]).into();
        let first = field(0usize);
        assert_eq!(first(&rows), json!([1, 2]).into());
    }
}
