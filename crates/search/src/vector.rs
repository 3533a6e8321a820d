use crate::error::Result;
use kb_chunker::Chunk;
use kb_embeddings::{cosine_similarity, EmbeddingClient};
use std::collections::HashMap;

/// Score every embedded chunk against the query terms.
///
/// All terms are embedded in one call; each chunk keeps the maximum cosine
/// similarity across the term vectors, floored at 0.0. Chunks without a
/// stored embedding are absent from the result, not scored as zero.
pub fn vector_search(
    client: &dyn EmbeddingClient,
    chunks: &[Chunk],
    terms: &[String],
) -> Result<HashMap<usize, f32>> {
    let query_vectors = client.embed(terms)?;

    let mut scores = HashMap::new();
    for chunk in chunks {
        let Some(embedding) = &chunk.embedding else {
            continue;
        };
        let mut best = 0.0f32;
        for vector in &query_vectors {
            best = best.max(cosine_similarity(vector, embedding));
        }
        scores.insert(chunk.id, best);
    }

    log::debug!("Vector pass: {} of {} chunks scored", scores.len(), chunks.len());
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb_embeddings::EmbeddingError;
    use pretty_assertions::assert_eq;

    /// Returns a fixed vector per recognised term.
    struct FixedClient;

    impl EmbeddingClient for FixedClient {
        fn embed(&self, texts: &[String]) -> kb_embeddings::Result<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|text| match text.as_str() {
                    "east" => vec![1.0, 0.0],
                    "north" => vec![0.0, 1.0],
                    _ => vec![-1.0, 0.0],
                })
                .collect())
        }

        fn model_id(&self) -> &str {
            "fixed"
        }
    }

    struct FailingClient;

    impl EmbeddingClient for FailingClient {
        fn embed(&self, _texts: &[String]) -> kb_embeddings::Result<Vec<Vec<f32>>> {
            Err(EmbeddingError::Api("service unavailable".to_string()))
        }

        fn model_id(&self) -> &str {
            "failing"
        }
    }

    fn chunk(id: usize, embedding: Option<Vec<f32>>) -> Chunk {
        Chunk {
            id,
            file: "doc.md".to_string(),
            section: "(top)".to_string(),
            line_start: 1,
            line_end: 1,
            text: "body".to_string(),
            embedding,
        }
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn keeps_the_best_similarity_across_terms() {
        let chunks = vec![chunk(0, Some(vec![0.0, 1.0]))];
        let scores = vector_search(&FixedClient, &chunks, &terms(&["east", "north"])).unwrap();
        assert!((scores[&0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn negative_similarities_floor_at_zero() {
        let chunks = vec![chunk(0, Some(vec![1.0, 0.0]))];
        let scores = vector_search(&FixedClient, &chunks, &terms(&["other"])).unwrap();
        assert_eq!(scores[&0], 0.0);
    }

    #[test]
    fn chunks_without_embeddings_are_absent() {
        let chunks = vec![chunk(0, Some(vec![1.0, 0.0])), chunk(1, None)];
        let scores = vector_search(&FixedClient, &chunks, &terms(&["east"])).unwrap();
        assert_eq!(scores.len(), 1);
        assert!(!scores.contains_key(&1));
    }

    #[test]
    fn embedding_failure_propagates() {
        let chunks = vec![chunk(0, Some(vec![1.0, 0.0]))];
        let err = vector_search(&FailingClient, &chunks, &terms(&["east"])).unwrap_err();
        assert!(matches!(err, crate::SearchError::Embedding(_)));
    }
}
