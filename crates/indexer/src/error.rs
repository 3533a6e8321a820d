use thiserror::Error;

/// Result type for indexing operations
pub type Result<T> = std::result::Result<T, IndexerError>;

/// Errors from index builds
#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Embedding error: {0}")]
    Embedding(#[from] kb_embeddings::EmbeddingError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid knowledge-base root: {0}")]
    InvalidRoot(String),
}
