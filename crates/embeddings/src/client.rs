use crate::error::{EmbeddingError, Result};

/// Batch text embedding backend.
///
/// Implementations return one vector per input text, in input order. Calls
/// are blocking; a failure aborts the whole build or query that issued it.
pub trait EmbeddingClient {
    /// Embed a batch of texts.
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Model identifier recorded in the index artifact.
    fn model_id(&self) -> &str;
}

/// Embed texts in sequential sub-batches of at most `max_batch`.
///
/// Sub-results are verified for length and concatenated in input order, so
/// callers see one vector per text regardless of how many calls were issued.
pub fn embed_batched(
    client: &dyn EmbeddingClient,
    texts: &[String],
    max_batch: usize,
) -> Result<Vec<Vec<f32>>> {
    let mut all = Vec::with_capacity(texts.len());
    for batch in texts.chunks(max_batch.max(1)) {
        let mut vectors = client.embed(batch)?;
        if vectors.len() != batch.len() {
            return Err(EmbeddingError::CountMismatch {
                requested: batch.len(),
                received: vectors.len(),
            });
        }
        all.append(&mut vectors);
    }
    Ok(all)
}
