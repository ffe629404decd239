//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::GraphError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Graph(#[from] GraphError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Graph(e) => match e {
                GraphError::FileNotFound(_) => crate::exitcode::NOINPUT,
                GraphError::FileReadError(_) => crate::exitcode::IOERR,
                GraphError::VertexOutOfRange { .. }
                | GraphError::EmptyGraph
                | GraphError::InvalidFormat { .. } => crate::exitcode::DATAERR,
            },
        }
    }
}
