#![forbid(unsafe_code)]
//! quiver-pipeline: run linear chains of registry operations described in YAML.
//!
//! Flow:
//! - `dsl::yaml` parses a document into a `Pipeline` of `{ op, args }` steps.
//! - `runtime::Runner` resolves `$ref` arguments against named bindings and
//!   feeds the output of each step into the next as its data argument.
//! - `input` reads JSON documents under a byte cap.
//! - `metrics` emits per-step trace events when the `tracing` feature is on.

pub mod dsl;
pub mod error;
pub mod input;
pub mod metrics;
pub mod runtime;

pub use dsl::yaml::{parse_yaml_pipeline, Pipeline, PipelineConfig, Step};
pub use error::{ExecError, Result};
pub use runtime::Runner;
