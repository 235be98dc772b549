//! Shape predicates ("mold") and the predicate-or-template parameter.

use std::fmt;
use std::sync::Arc;

use quiver_core::compare::loose_eq;
use quiver_core::{Map, Value};

/// Returns a predicate holding for every candidate whose fields loosely equal
/// each field of `template`. An empty (or non-mapping) template matches all.
pub fn mold(template: &Value) -> impl Fn(&Value) -> bool + '_ {
    move |candidate: &Value| matches_template(template, candidate)
}

static ABSENT: Value = Value::Absent;

pub fn matches_template(template: &Value, candidate: &Value) -> bool {
    let Some(fields) = template.as_map() else {
        return true;
    };
    fields.iter().all(|(key, expected)| {
        let actual = match candidate {
            Value::Map(m) => m.get(key).unwrap_or(&ABSENT),
            _ => &ABSENT,
        };
        loose_eq(actual, expected)
    })
}

pub type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A callable predicate or a shape template.
#[derive(Clone)]
pub enum Predicate {
    Fn(PredicateFn),
    Template(Value),
}

impl Predicate {
    pub fn func(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Predicate::Fn(Arc::new(f))
    }

    /// Resolve to a single callable; done once per operation call.
    pub fn resolve(&self) -> Box<dyn Fn(&Value) -> bool + '_> {
        match self {
            Predicate::Fn(f) => Box::new(move |v: &Value| f(v)),
            Predicate::Template(t) => Box::new(mold(t)),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Fn(_) => f.write_str("Predicate::Fn(..)"),
            Predicate::Template(t) => write!(f, "Predicate::Template({t})"),
        }
    }
}

impl From<Value> for Predicate {
    fn from(template: Value) -> Self {
        Predicate::Template(template)
    }
}

impl From<Map> for Predicate {
    fn from(template: Map) -> Self {
        Predicate::Template(Value::Map(template))
    }
}
