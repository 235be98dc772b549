//! YAML → `Pipeline` parser for *linear* operation chains.
//!
//! Example:
//! ```yaml
//! config:
//!   pretty: true
//! steps:
//!   - op: filter
//!     args: [{ active: true }]
//!   - op: amend
//!     args: [{ $ref: teams }, ["team", "id"]]
//!   - op: sort
//!     args: ["-age"]
//!   - op: pluck
//!     args: ["name"]
//! ```
//!
//! Each step names a registry operation and the leading arguments to curry
//! into it; the data flowing through the pipeline is supplied last.

use serde::{Deserialize, Serialize};

use quiver_core::Value;
use quiver_ops::Registry;

use crate::error::{ExecError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub config: PipelineConfig,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub op: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Settings a pipeline document may carry. Unset fields defer to the
/// environment; CLI flags override both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub pretty: Option<bool>,
    pub input_cap_bytes: Option<usize>,
}

impl PipelineConfig {
    /// Overlay the fields this document sets onto `cfg`.
    pub fn apply_to(&self, cfg: &mut quiver_core::config::QuiverConfig) {
        if let Some(pretty) = self.pretty {
            cfg.pretty = pretty;
        }
        if let Some(cap) = self.input_cap_bytes {
            cfg.input_cap_bytes = cap;
        }
    }
}

impl Pipeline {
    /// Report the first step naming an operation `registry` does not know.
    pub fn validate(&self, registry: &Registry) -> Result<()> {
        for (step, s) in self.steps.iter().enumerate() {
            if !registry.contains(&s.op) {
                return Err(ExecError::UnknownOp {
                    step,
                    op: s.op.clone(),
                });
            }
        }
        Ok(())
    }

    /// Names of every `$ref` binding the steps mention, in first-use order.
    pub fn references(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for step in &self.steps {
            for arg in &step.args {
                if let Some(name) = ref_name(arg) {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
        }
        names
    }
}

/// `{ "$ref": name }` → `name`.
pub fn ref_name(arg: &Value) -> Option<&str> {
    let map = arg.as_map()?;
    if map.len() != 1 {
        return None;
    }
    map.get("$ref").and_then(Value::as_str)
}

/// Parse a YAML document into a `Pipeline`. An empty step list is rejected.
pub fn parse_yaml_pipeline(yaml_src: &str) -> Result<Pipeline> {
    let doc: Pipeline = serde_yaml::from_str(yaml_src)?;
    if doc.steps.is_empty() {
        return Err(ExecError::Parse("invalid: empty pipeline".into()));
    }
    Ok(doc)
}
