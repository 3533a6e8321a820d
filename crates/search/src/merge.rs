use crate::keyword::KeywordHits;
use kb_chunker::Chunk;
use std::collections::HashMap;

/// Minimum trimmed chunk length considered for ranking.
const MIN_CHUNK_CHARS: usize = 50;

/// Semantic floor below which a chunk needs keyword density to survive.
const MIN_SEMANTIC_SCORE: f32 = 0.25;

/// Keyword floor for chunks below the semantic floor.
const MIN_KEYWORD_HITS: usize = 3;

/// Per-hit multiplicative boost on the semantic score.
const KEYWORD_BOOST_STEP: f32 = 0.15;

/// Keyword hits counted toward the boost.
const KEYWORD_HIT_CAP: usize = 5;

/// Score per hit for pure keyword matches.
const PURE_KEYWORD_STEP: f32 = 0.05;

/// A ranked chunk with the signals that produced its position.
#[derive(Debug, Clone)]
pub struct ScoredResult {
    pub chunk: Chunk,
    pub keyword_hits: KeywordHits,
    pub semantic_score: f32,
    pub combined_score: f32,
}

impl ScoredResult {
    /// Sum of per-term keyword counts.
    #[must_use]
    pub fn keyword_total(&self) -> usize {
        self.keyword_hits.iter().map(|(_, count)| count).sum()
    }
}

/// Merge the keyword and vector signals into a ranked, truncated list.
///
/// Candidates are the union of chunk ids in either signal. Tiny chunks are
/// discarded, as are chunks below both the semantic and keyword floors.
/// Keyword hits multiply semantic relevance, capped at five counted hits
/// (1.75x); pure keyword matches score on a low scale (0.25 ceiling) and
/// rank below any genuine semantic match. Exact score ties order by
/// ascending chunk id.
#[must_use]
pub fn merge_results(
    chunks: &[Chunk],
    keyword_hits: &HashMap<usize, KeywordHits>,
    vector_scores: &HashMap<usize, f32>,
    limit: usize,
) -> Vec<ScoredResult> {
    let by_id: HashMap<usize, &Chunk> = chunks.iter().map(|chunk| (chunk.id, chunk)).collect();

    let mut candidates: Vec<usize> = keyword_hits
        .keys()
        .chain(vector_scores.keys())
        .copied()
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    let mut scored = Vec::new();
    for id in candidates {
        let Some(chunk) = by_id.get(&id) else {
            continue;
        };
        let hits = keyword_hits.get(&id).cloned().unwrap_or_default();
        let keyword_total: usize = hits.iter().map(|(_, count)| count).sum();
        let semantic = vector_scores.get(&id).copied().unwrap_or(0.0);

        if chunk.text.trim().chars().count() < MIN_CHUNK_CHARS {
            continue;
        }
        if semantic < MIN_SEMANTIC_SCORE && keyword_total < MIN_KEYWORD_HITS {
            continue;
        }

        let counted_hits = keyword_total.min(KEYWORD_HIT_CAP) as f32;
        let combined = if semantic > 0.0 {
            semantic * (1.0 + KEYWORD_BOOST_STEP * counted_hits)
        } else {
            PURE_KEYWORD_STEP * counted_hits
        };

        scored.push(ScoredResult {
            chunk: (*chunk).clone(),
            keyword_hits: hits,
            semantic_score: semantic,
            combined_score: combined,
        });
    }

    scored.sort_by(|a, b| {
        b.combined_score
            .partial_cmp(&a.combined_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.chunk.id.cmp(&b.chunk.id))
    });
    scored.truncate(limit);

    log::debug!("Merged to {} results", scored.len());
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Long enough to clear the minimum-length filter.
    fn chunk(id: usize) -> Chunk {
        Chunk {
            id,
            file: format!("doc{id}.md"),
            section: "Section".to_string(),
            line_start: 1,
            line_end: 5,
            text: "x".repeat(80),
            embedding: None,
        }
    }

    fn short_chunk(id: usize) -> Chunk {
        Chunk {
            text: "tiny".to_string(),
            ..chunk(id)
        }
    }

    fn hits(pairs: &[(usize, usize)]) -> HashMap<usize, KeywordHits> {
        pairs
            .iter()
            .map(|&(id, count)| (id, vec![("term".to_string(), count)]))
            .collect()
    }

    fn scores(pairs: &[(usize, f32)]) -> HashMap<usize, f32> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn keyword_hits_boost_semantic_scores() {
        let chunks = vec![chunk(0)];
        let results = merge_results(&chunks, &hits(&[(0, 2)]), &scores(&[(0, 0.5)]), 10);

        assert_eq!(results.len(), 1);
        assert!((results[0].combined_score - 0.65).abs() < 1e-6);
    }

    #[test]
    fn keyword_boost_is_capped_at_five_hits() {
        let chunks = vec![chunk(0)];
        let results = merge_results(&chunks, &hits(&[(0, 10)]), &scores(&[(0, 0.5)]), 10);

        assert!((results[0].combined_score - 0.875).abs() < 1e-6);
    }

    #[test]
    fn pure_keyword_matches_score_low() {
        let chunks = vec![chunk(0)];
        let results = merge_results(&chunks, &hits(&[(0, 4)]), &scores(&[]), 10);

        assert!((results[0].combined_score - 0.2).abs() < 1e-6);
        assert_eq!(results[0].semantic_score, 0.0);
    }

    #[test]
    fn weak_chunks_below_both_floors_are_excluded() {
        let chunks = vec![chunk(0), chunk(1)];
        let keyword = hits(&[(0, 1), (1, 3)]);
        let vector = scores(&[(0, 0.1)]);

        let results = merge_results(&chunks, &keyword, &vector, 10);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chunk.id, 1);
    }

    #[test]
    fn strong_semantics_survive_without_keywords() {
        let chunks = vec![chunk(0)];
        let results = merge_results(&chunks, &hits(&[]), &scores(&[(0, 0.3)]), 10);

        assert_eq!(results.len(), 1);
        assert!((results[0].combined_score - 0.3).abs() < 1e-6);
    }

    #[test]
    fn tiny_chunks_are_excluded_regardless_of_signal() {
        let chunks = vec![short_chunk(0)];
        let results = merge_results(&chunks, &hits(&[(0, 5)]), &scores(&[(0, 0.9)]), 10);
        assert!(results.is_empty());
    }

    #[test]
    fn results_sort_descending_and_truncate_to_limit() {
        let chunks = vec![chunk(0), chunk(1), chunk(2)];
        let vector = scores(&[(0, 0.4), (1, 0.9), (2, 0.6)]);

        let results = merge_results(&chunks, &hits(&[]), &vector, 2);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].chunk.id, 1);
        assert_eq!(results[1].chunk.id, 2);
        assert!(results[0].combined_score >= results[1].combined_score);
    }

    #[test]
    fn exact_ties_order_by_ascending_chunk_id() {
        let chunks = vec![chunk(7), chunk(3), chunk(5)];
        let vector = scores(&[(7, 0.5), (3, 0.5), (5, 0.5)]);

        let results = merge_results(&chunks, &hits(&[]), &vector, 10);

        let ids: Vec<usize> = results.iter().map(|r| r.chunk.id).collect();
        assert_eq!(ids, vec![3, 5, 7]);
    }

    #[test]
    fn keyword_total_sums_across_terms() {
        let result = ScoredResult {
            chunk: chunk(0),
            keyword_hits: vec![("a".to_string(), 2), ("b".to_string(), 3)],
            semantic_score: 0.0,
            combined_score: 0.0,
        };
        assert_eq!(result.keyword_total(), 5);
    }
}
