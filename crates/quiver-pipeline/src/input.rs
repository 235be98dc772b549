//! JSON documents read under a byte cap.

use std::fs;
use std::path::Path;

use quiver_core::Value;

use crate::error::{ExecError, Result};

/// Parse `bytes` as JSON, rejecting documents larger than `cap`.
pub fn parse_json_capped(bytes: &[u8], cap: usize) -> Result<Value> {
    if bytes.len() > cap {
        return Err(ExecError::Input(format!(
            "document is {} bytes, cap is {}",
            bytes.len(),
            cap
        )));
    }
    let doc: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| ExecError::Input(e.to_string()))?;
    Ok(Value::from(doc))
}

/// Read and parse a JSON file, checking its size before reading it.
pub fn read_json_file(path: &Path, cap: usize) -> Result<Value> {
    let len = fs::metadata(path)?.len();
    if len > cap as u64 {
        return Err(ExecError::Input(format!(
            "{} is {} bytes, cap is {}",
            path.display(),
            len,
            cap
        )));
    }
    let bytes = fs::read(path)?;
    parse_json_capped(&bytes, cap)
        .map_err(|e| ExecError::Input(format!("{}: {}", path.display(), e)))
}
