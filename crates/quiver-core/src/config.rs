//! Runtime configuration that the pipeline runner and CLI share.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuiverConfig {
    /// Upper bound (in bytes) on any JSON document read as pipeline input.
    pub input_cap_bytes: usize,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// `tracing-subscriber` filter directive used by the CLI.
    pub log_filter: String,
}

impl Default for QuiverConfig {
    fn default() -> Self {
        Self {
            input_cap_bytes: 64 * 1024 * 1024, // 64 MiB default
            pretty: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl QuiverConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `QUIVER_INPUT_CAP_BYTES`: input size cap in bytes
    /// - `QUIVER_PRETTY`: `1`/`true`/`yes` to pretty-print output
    /// - `QUIVER_LOG`: log filter directive (e.g. `quiver_pipeline=debug`)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("QUIVER_INPUT_CAP_BYTES") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.input_cap_bytes = v;
            }
        }

        if let Some(s) = lookup("QUIVER_PRETTY") {
            if let Some(v) = parse_flag(&s) {
                cfg.pretty = v;
            }
        }

        if let Some(s) = lookup("QUIVER_LOG") {
            if !s.trim().is_empty() {
                cfg.log_filter = s;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_cap_bytes == 0 {
            return Err(Error::Config("input_cap_bytes must be positive".into()));
        }
        Ok(())
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
