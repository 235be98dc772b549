//! Callable-or-key selectors.
//!
//! Operations resolve a `Selector` into one boxed callable before iterating,
//! never per element.

use std::fmt;
use std::sync::Arc;

use quiver_core::{Key, Value};

use crate::field::field;

pub type SelectFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// A resolved selector, borrowed from the `Selector` it came from.
pub type Resolved<'a> = Box<dyn Fn(&Value) -> Value + 'a>;

#[derive(Clone)]
pub enum Selector {
    Fn(SelectFn),
    Key(Key),
}

impl Selector {
    pub fn func(f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Selector::Fn(Arc::new(f))
    }

    /// Key-like values (strings, non-negative integers) become key selectors.
    pub fn from_value(v: &Value) -> Option<Self> {
        Key::from_value(v).map(Selector::Key)
    }

    pub fn resolve(&self) -> Resolved<'_> {
        match self {
            Selector::Fn(f) => Box::new(move |v: &Value| f(v)),
            Selector::Key(key) => Box::new(field(key.clone())),
        }
    }

    /// Like `resolve`, except a key name starting with `-` selects the
    /// negated field, giving a descending order. Negating a non-numeric field
    /// produces NaN.
    pub fn resolve_sort(&self) -> Resolved<'_> {
        match self {
            Selector::Key(Key::Name(name)) => match name.strip_prefix('-') {
                Some(stripped) => {
                    let key = Key::Name(stripped.to_string());
                    Box::new(move |v: &Value| v.lookup(&key).negated())
                }
                None => self.resolve(),
            },
            _ => self.resolve(),
        }
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Fn(_) => f.write_str("Selector::Fn(..)"),
            Selector::Key(k) => write!(f, "Selector::Key({k})"),
        }
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Selector::Key(Key::from(s))
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        Selector::Key(Key::from(s))
    }
}

impl From<usize> for Selector {
    fn from(i: usize) -> Self {
        Selector::Key(Key::Index(i))
    }
}

impl From<Key> for Selector {
    fn from(k: Key) -> Self {
        Selector::Key(k)
    }
}
