//! # KB Indexer
//!
//! Corpus discovery, fingerprinting, and incremental index builds for the
//! markdown knowledge base.
//!
//! ## Pipeline
//!
//! ```text
//! Root directory
//!     │
//!     ├──> File Scanner (.md files, fixed exclusions)
//!     │      └─> Sorted relative paths
//!     │
//!     ├──> Change detection (SHA-256 fingerprints vs previous build)
//!     │      └─> changed-or-new / deleted
//!     │
//!     ├──> Chunker (changed files) + verbatim copy (unchanged files)
//!     │      └─> Ordered chunk list
//!     │
//!     └──> Embedding client (new chunks only, batched)
//!            └─> index.json artifact
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use kb_embeddings::StubEmbeddings;
//! use kb_indexer::KbIndexer;
//!
//! fn main() -> kb_indexer::Result<()> {
//!     let client = StubEmbeddings::new(256);
//!     let indexer = KbIndexer::new("/path/to/kb", &client)?;
//!     let stats = indexer.index()?;
//!
//!     println!("Indexed {} files, {} chunks", stats.files, stats.chunks);
//!     Ok(())
//! }
//! ```

mod error;
mod fingerprint;
mod indexer;
mod scanner;
mod stats;
mod store;

pub use error::{IndexerError, Result};
pub use fingerprint::fingerprint;
pub use indexer::{ChangeSet, KbIndexer};
pub use scanner::FileScanner;
pub use stats::IndexStats;
pub use store::{IndexStore, KnowledgeIndex, INDEX_DIR_NAME, INDEX_FILE_NAME};
