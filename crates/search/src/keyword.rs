use kb_chunker::Chunk;
use std::collections::HashMap;

/// Per-chunk keyword hits, kept in query-term order.
pub type KeywordHits = Vec<(String, usize)>;

/// Count exact keyword occurrences in every chunk.
///
/// Counts are case-insensitive, non-overlapping substring occurrences with
/// both sides lower-cased. Terms with zero occurrences are omitted from a
/// chunk's hits; chunks with no matching term are omitted entirely.
#[must_use]
pub fn keyword_search(chunks: &[Chunk], terms: &[String]) -> HashMap<usize, KeywordHits> {
    let needles: Vec<String> = terms.iter().map(|term| term.to_lowercase()).collect();

    let mut results = HashMap::new();
    for chunk in chunks {
        let text = chunk.text.to_lowercase();
        let mut hits: KeywordHits = Vec::new();
        for (term, needle) in terms.iter().zip(&needles) {
            if needle.is_empty() {
                continue;
            }
            let count = text.matches(needle.as_str()).count();
            if count > 0 {
                hits.push((term.clone(), count));
            }
        }
        if !hits.is_empty() {
            results.insert(chunk.id, hits);
        }
    }

    log::debug!("Keyword pass: {} of {} chunks matched", results.len(), chunks.len());
    results
}
