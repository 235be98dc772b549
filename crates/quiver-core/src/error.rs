use thiserror::Error;

/// Canonical result for core and the operation crates.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A curried function was invoked with zero arguments.
    #[error("Function called with no arguments")]
    NoArgs,

    /// An untyped argument did not have the container shape an operation needs.
    #[error("{op}: expected {expected}, found {found}")]
    Type {
        op: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A generated sequence would hold more elements than allowed.
    #[error("{op}: sequence of {requested} elements exceeds the limit of {limit}")]
    TooLong {
        op: &'static str,
        requested: f64,
        limit: usize,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}

impl Error {
    pub fn type_mismatch(op: &'static str, expected: &'static str, found: &crate::Value) -> Self {
        Error::Type {
            op,
            expected,
            found: found.kind_name(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
