//! Runtime: walk a `Pipeline` step by step over one data value.
//!
//! For every step:
//! - `{ $ref: name }` arguments are replaced with the bound value;
//! - the arguments are curried into the named operation;
//! - a still-partial operation receives the current data last;
//! - a saturated operation's result replaces the data (source steps).

use std::collections::HashMap;

use quiver_core::Value;
use quiver_ops::{Applied, Registry};

use crate::dsl::yaml::{ref_name, Pipeline, Step};
use crate::error::{ExecError, Result};
use crate::metrics::emit_span;

/// Owns the operation registry and the named values `$ref` arguments resolve to.
pub struct Runner {
    registry: Registry,
    bindings: HashMap<String, Value>,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            bindings: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Make `value` available to steps as `{ $ref: name }`. Rebinding replaces.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.bindings.insert(name.into(), value);
        self
    }

    /// Run every step in order, threading `input` through them.
    pub fn run(&self, pipeline: &Pipeline, input: Value) -> Result<Value> {
        pipeline.validate(&self.registry)?;

        let mut data = input;
        for (index, step) in pipeline.steps.iter().enumerate() {
            data = self.run_step(index, step, data)?;
        }
        Ok(data)
    }

    /// Apply a single step to `data`.
    pub fn run_step(&self, index: usize, step: &Step, data: Value) -> Result<Value> {
        let op = self
            .registry
            .get(&step.op)
            .ok_or_else(|| ExecError::UnknownOp {
                step: index,
                op: step.op.clone(),
            })?;
        let args = self.resolve_args(index, &step.args)?;

        let applied = if args.is_empty() {
            op.apply([data])?
        } else {
            match op.apply(args)? {
                Applied::Partial(partial) => partial.apply([data])?,
                done => done,
            }
        };

        let out = match applied {
            Applied::Done(v) => v,
            Applied::Partial(p) => {
                return Err(ExecError::Arity {
                    step: index,
                    op: step.op.clone(),
                    remaining: p.remaining(),
                })
            }
        };

        let shape = shape_of(&out);
        #[cfg(feature = "tracing")]
        tracing::debug!(step = index, op = %step.op, %shape, "step complete");
        emit_span(
            "step",
            &[("index", index.to_string()), ("op", step.op.clone()), ("shape", shape)],
        );

        Ok(out)
    }

    fn resolve_args(&self, index: usize, args: &[Value]) -> Result<Vec<Value>> {
        args.iter()
            .map(|arg| match ref_name(arg) {
                Some(name) => self.bindings.get(name).cloned().ok_or_else(|| {
                    ExecError::UnresolvedRef {
                        step: index,
                        name: name.to_string(),
                    }
                }),
                None => Ok(arg.clone()),
            })
            .collect()
    }
}

/// Short description of a value for logs: `list[3]`, `map{2}`, or the kind.
pub fn shape_of(v: &Value) -> String {
    match v {
        Value::List(items) => format!("list[{}]", items.len()),
        Value::Map(m) => format!("map{{{}}}", m.len()),
        other => other.kind_name().to_string(),
    }
}
