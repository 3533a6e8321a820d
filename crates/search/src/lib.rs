//! # KB Search
//!
//! Hybrid keyword + semantic search over the persisted knowledge-base index.
//!
//! Two independent passes score every chunk: exact case-insensitive keyword
//! counting and cosine similarity against the stored embeddings. The merger
//! combines them multiplicatively, so keyword hits amplify semantic
//! relevance but never dominate it, and renders a ranked text report.
//!
//! ## Example
//!
//! ```no_run
//! use kb_embeddings::StubEmbeddings;
//! use kb_indexer::IndexStore;
//! use kb_search::{render_report, HybridSearch, SearchQuery};
//!
//! fn main() -> kb_search::Result<()> {
//!     let index = IndexStore::for_root(".").load().expect("index missing");
//!     let client = StubEmbeddings::new(256);
//!
//!     let query = SearchQuery::new(vec!["deploy".to_string()]);
//!     let results = HybridSearch::new(&index, Some(&client)).search(&query)?;
//!
//!     println!("{}", render_report(&results));
//!     Ok(())
//! }
//! ```

mod engine;
mod error;
mod keyword;
mod merge;
mod report;
mod vector;

pub use engine::{HybridSearch, SearchQuery, DEFAULT_LIMIT};
pub use error::{Result, SearchError};
pub use keyword::{keyword_search, KeywordHits};
pub use merge::{merge_results, ScoredResult};
pub use report::render_report;
pub use vector::vector_search;
