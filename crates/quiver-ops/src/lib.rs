#![forbid(unsafe_code)]
//! quiver-ops: list and object operations over `quiver_core::Value`.
//!
//! Design intent:
//! - Every operation is a single synchronous pass that allocates a fresh
//!   output and never mutates its inputs.
//! - Callable-or-key parameters (`Selector`, `Predicate`) are resolved once per
//!   call, before the pass begins.
//! - The typed functions take all of their arguments at once; `registry` wraps
//!   them as curried `Curried` values for untyped callers (the pipeline runner).

pub mod curry;
pub mod field;
pub mod mold;
pub mod registry;
pub mod selector;

pub mod filter;
pub mod fold;
pub mod group;
pub mod join;
pub mod map;
pub mod object;
pub mod range;
pub mod sort;

pub use curry::{curry2, curry3, variadic, Applied, Curried};
pub use field::{field, field_of};
pub use mold::{matches_template, mold, Predicate};
pub use registry::Registry;
pub use selector::Selector;

pub use filter::{filter, find, unique};
pub use fold::{fold, taper};
pub use group::group;
pub use join::amend;
pub use map::{curtail, expand, map, pluck};
pub use object::{abate, collect, keys, map_values, mixin, omit, pick};
pub use range::{identity, lay, range, MAX_SEQUENCE_LEN};
pub use sort::{max, min, sort};
