//! Convenient re-exports for downstream crates.

pub use crate::compare::{loose_eq, value_cmp};
pub use crate::config::QuiverConfig;
pub use crate::error::{Error, Result};
pub use crate::hash::{hash_value, Hash256};
pub use crate::value::{Key, Map, Value};
