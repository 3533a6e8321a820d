use crate::error::{Result, SearchError};
use crate::keyword::keyword_search;
use crate::merge::{merge_results, ScoredResult};
use crate::vector::vector_search;
use kb_embeddings::EmbeddingClient;
use kb_indexer::KnowledgeIndex;
use std::collections::HashMap;

/// Default result-count limit.
pub const DEFAULT_LIMIT: usize = 10;

/// A query over the persisted index.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Literal search terms, case-preserving for display.
    pub terms: Vec<String>,

    /// Maximum number of results returned.
    pub limit: usize,

    /// Skip semantic scoring and rank by keywords alone.
    pub keyword_only: bool,
}

impl SearchQuery {
    #[must_use]
    pub fn new(terms: Vec<String>) -> Self {
        Self {
            terms,
            limit: DEFAULT_LIMIT,
            keyword_only: false,
        }
    }
}

/// Hybrid search over a loaded index.
///
/// The keyword and vector passes are independent; with no client (or in
/// keyword-only mode) the vector signal is simply empty and the merger's
/// pure-keyword scale applies.
pub struct HybridSearch<'a> {
    index: &'a KnowledgeIndex,
    client: Option<&'a dyn EmbeddingClient>,
}

impl<'a> HybridSearch<'a> {
    #[must_use]
    pub fn new(index: &'a KnowledgeIndex, client: Option<&'a dyn EmbeddingClient>) -> Self {
        Self { index, client }
    }

    /// Run both passes and merge into a ranked list.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<ScoredResult>> {
        if query.terms.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        log::debug!(
            "Searching {} chunks for {:?} (limit {}, keyword_only: {})",
            self.index.chunks.len(),
            query.terms,
            query.limit,
            query.keyword_only
        );

        let keyword_hits = keyword_search(&self.index.chunks, &query.terms);

        let vector_scores = match (query.keyword_only, self.client) {
            (false, Some(client)) => vector_search(client, &self.index.chunks, &query.terms)?,
            _ => HashMap::new(),
        };

        Ok(merge_results(
            &self.index.chunks,
            &keyword_hits,
            &vector_scores,
            query.limit,
        ))
    }
}
