//! # KB Embeddings
//!
//! The embedding collaborator for the knowledge-base index: a batch text
//! embedding trait, an OpenAI-compatible HTTP backend, a deterministic stub
//! backend for tests and offline runs, and cosine similarity.
//!
//! ## Pipeline
//!
//! ```text
//! texts[]
//!     │
//!     ├──> embed_batched (≤ max_batch per call, sequential)
//!     │      └─> EmbeddingClient backend (HTTP or stub)
//!     │
//!     └──> Vec<Vec<f32>> (one vector per text, input order)
//! ```
//!
//! ## Example
//!
//! ```
//! use kb_embeddings::{embed_batched, EmbeddingClient, StubEmbeddings};
//!
//! let client = StubEmbeddings::new(64);
//! let texts = vec!["first note".to_string(), "second note".to_string()];
//! let vectors = embed_batched(&client, &texts, 50).unwrap();
//!
//! assert_eq!(vectors.len(), 2);
//! assert_eq!(vectors[0].len(), 64);
//! ```

mod client;
mod config;
mod error;
mod openai;
mod similarity;
mod stub;

pub use client::{embed_batched, EmbeddingClient};
pub use config::{EmbeddingConfig, DEFAULT_API_BASE, DEFAULT_MAX_BATCH, DEFAULT_MODEL};
pub use error::{EmbeddingError, Result};
pub use openai::OpenAiEmbeddings;
pub use similarity::cosine_similarity;
pub use stub::{StubEmbeddings, STUB_DIMENSION};

/// Embedding backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingMode {
    /// OpenAI-compatible HTTP service.
    OpenAi,
    /// Deterministic offline vectors.
    Stub,
}

/// Construct the embedding client for a backend mode.
pub fn build_client(mode: EmbeddingMode, config: &EmbeddingConfig) -> Result<Box<dyn EmbeddingClient>> {
    match mode {
        EmbeddingMode::OpenAi => Ok(Box::new(OpenAiEmbeddings::new(config)?)),
        EmbeddingMode::Stub => Ok(Box::new(StubEmbeddings::new(STUB_DIMENSION))),
    }
}
