use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("Graph has no vertices")]
    EmptyGraph,

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Invalid edge list in {path}, line {line}: {reason}")]
    InvalidFormat {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
