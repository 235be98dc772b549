#![forbid(unsafe_code)]
//! quiver-core: the dynamic `Value` model shared by every quiver crate.
//!
//! Contents:
//! - `value`: the `Value`/`Key` types plus numeric coercion and key rendering.
//! - `compare`: the total sort order and the documented loose equality.
//! - `hash`: structural blake3 digests (used for de-duplication).
//! - `error`/`config`: the crate-wide error enum and runtime configuration.
//!
//! Nothing in here performs I/O.

pub mod compare;
pub mod config;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod value;

pub use error::{Error, Result};
pub use value::{Key, Map, Value};
