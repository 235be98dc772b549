#![forbid(unsafe_code)]
//! quiver: small functional helpers over dynamic (JSON-shaped) values.
//!
//! This facade re-exports the workspace crates:
//! - `core`: `Value`, `Key`, comparisons, digests, errors, configuration.
//! - `ops`: typed operations plus the curried, name-addressed `Registry`.
//! - `pipeline`: YAML pipelines and the `Runner` that executes them.

pub use quiver_core as core;
pub use quiver_ops as ops;
pub use quiver_pipeline as pipeline;

pub use quiver_core::{Error, Key, Map, Result, Value};
pub use quiver_ops::{curry2, curry3, Applied, Curried, Predicate, Registry, Selector};
pub use quiver_pipeline::{parse_yaml_pipeline, ExecError, Pipeline, Runner};
