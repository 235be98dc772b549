//! Fixed-arity partial application over untyped `Value` arguments.
//!
//! A `Curried` value dispatches purely on how many arguments it has received:
//! - none: `Error::NoArgs`, at every stage;
//! - fewer than its arity: a new `Curried` holding the arguments so far;
//! - arity or more: the wrapped function runs on the first `max` arguments.

use std::fmt;
use std::sync::Arc;

use quiver_core::{Error, Result, Value};

/// Shared body of a curried operation; receives between `min` and `max` args.
pub type OpFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

#[derive(Clone)]
pub struct Curried {
    name: &'static str,
    min: usize,
    max: usize,
    bound: Vec<Value>,
    f: OpFn,
}

/// Outcome of applying arguments to a `Curried`.
#[derive(Debug, Clone)]
pub enum Applied {
    Done(Value),
    Partial(Curried),
}

impl Applied {
    pub fn into_value(self) -> Option<Value> {
        match self {
            Applied::Done(v) => Some(v),
            Applied::Partial(_) => None,
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Applied::Partial(_))
    }
}

/// Curry a two-argument function.
pub fn curry2<F>(name: &'static str, f: F) -> Curried
where
    F: Fn(&Value, &Value) -> Result<Value> + Send + Sync + 'static,
{
    Curried::new(name, 2, 2, Arc::new(move |args: &[Value]| f(&args[0], &args[1])))
}

/// Curry a three-argument function.
pub fn curry3<F>(name: &'static str, f: F) -> Curried
where
    F: Fn(&Value, &Value, &Value) -> Result<Value> + Send + Sync + 'static,
{
    Curried::new(
        name,
        3,
        3,
        Arc::new(move |args: &[Value]| f(&args[0], &args[1], &args[2])),
    )
}

/// Wrap a plain function that fires once `min` arguments are present and
/// sees at most `max` of them.
pub fn variadic<F>(name: &'static str, min: usize, max: usize, f: F) -> Curried
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
{
    Curried::new(name, min, max.max(min), Arc::new(f))
}

impl Curried {
    fn new(name: &'static str, min: usize, max: usize, f: OpFn) -> Self {
        Self {
            name,
            min,
            max,
            bound: Vec::new(),
            f,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of arguments that triggers invocation.
    pub fn arity(&self) -> usize {
        self.min
    }

    pub fn max_arity(&self) -> usize {
        self.max
    }

    /// Arguments still missing before the function runs.
    pub fn remaining(&self) -> usize {
        self.min.saturating_sub(self.bound.len())
    }

    pub fn bound(&self) -> &[Value] {
        &self.bound
    }

    pub fn apply<I>(&self, args: I) -> Result<Applied>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut args = args.into_iter().peekable();
        if args.peek().is_none() {
            return Err(Error::NoArgs);
        }

        let mut all = self.bound.clone();
        all.extend(args);

        if all.len() < self.min {
            return Ok(Applied::Partial(Curried {
                name: self.name,
                min: self.min,
                max: self.max,
                bound: all,
                f: Arc::clone(&self.f),
            }));
        }

        // Extras beyond the declared arity are dropped, not validated.
        all.truncate(self.max);
        (self.f)(&all).map(Applied::Done)
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("name", &self.name)
            .field("arity", &self.min)
            .field("bound", &self.bound)
            .finish()
    }
}
