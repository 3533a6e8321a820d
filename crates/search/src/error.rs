use thiserror::Error;

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors from query execution
#[derive(Error, Debug)]
pub enum SearchError {
    /// No search terms supplied
    #[error("No search terms given")]
    EmptyQuery,

    /// Query-time embedding failed
    #[error("Embedding error: {0}")]
    Embedding(#[from] kb_embeddings::EmbeddingError),
}
