use thiserror::Error;

/// Result type alias using `ChromaticError`.
pub type Result<T> = std::result::Result<T, ChromaticError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChromaticError {
    /// Invalid argument, e.g. a negative color count.
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    /// Vertex does not exist in the graph.
    #[error("VertexNotFound: {vertex} (graph has {num_vertices} vertices)")]
    VertexNotFound { vertex: usize, num_vertices: usize },

    /// Edge does not exist in the graph.
    #[error("EdgeNotFound: ({0}, {1})")]
    EdgeNotFound(usize, usize),

    /// Self-loops are never part of a graph.
    #[error("SelfLoop: ({0}, {0})")]
    SelfLoop(usize),

    /// Value does not fit into the i128 polynomial representation.
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Malformed edge-list input.
    #[error("ParseError: {0}")]
    Parse(String),

    /// IO error.
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
}
