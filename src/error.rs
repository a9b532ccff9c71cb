//! Error type shared by the whole crate.

use thiserror::Error;

/// Result type alias for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Debug, Error)]
pub enum NetworkError {
    /// The descriptor cannot be turned into a layered network
    #[error("Invalid topology: {0}")]
    Topology(String),

    /// A weights or biases list ran out before every slot was filled
    #[error("{list} list exhausted: needed {needed} values, got {available}")]
    ListExhausted {
        list: &'static str,
        needed: usize,
        available: usize,
    },

    /// A vector handed to the network does not match the layer it targets
    #[error("Dimension mismatch in {context}: expected {expected} values, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
