use thiserror::Error;

/// Result type for embedding operations
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Errors from the embedding backend
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Embedding API error: {0}")]
    Api(String),

    /// Credential missing from the environment
    #[error("Missing API key: set {0}")]
    MissingApiKey(&'static str),

    /// The service returned a different number of vectors than requested
    #[error("Embedding count mismatch: requested {requested}, received {received}")]
    CountMismatch { requested: usize, received: usize },
}
