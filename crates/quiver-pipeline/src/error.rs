use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExecError>;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("pipeline parse: {0}")]
    Parse(String),

    #[error("step {step}: unknown operation `{op}`")]
    UnknownOp { step: usize, op: String },

    #[error("step {step}: unresolved reference `{name}`")]
    UnresolvedRef { step: usize, name: String },

    #[error("step {step}: `{op}` still needs {remaining} argument(s) after receiving the data")]
    Arity {
        step: usize,
        op: String,
        remaining: usize,
    },

    #[error("operation failed: {0}")]
    Op(#[from] quiver_core::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("input: {0}")]
    Input(String),
}

impl From<serde_yaml::Error> for ExecError {
    fn from(e: serde_yaml::Error) -> Self {
        ExecError::Parse(e.to_string())
    }
}
