use crate::client::EmbeddingClient;
use crate::error::Result;
use sha2::{Digest, Sha256};

/// Dimension of stub vectors.
pub const STUB_DIMENSION: usize = 256;

/// Deterministic embedding backend for tests and offline runs.
///
/// Each text maps to an L2-normalised vector derived from chained SHA-256
/// blocks of its bytes, so equal texts always get equal vectors and no
/// network access is needed.
pub struct StubEmbeddings {
    model: String,
    dimension: usize,
}

impl StubEmbeddings {
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            model: format!("stub-{dimension}"),
            dimension,
        }
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let mut bytes = Vec::with_capacity(self.dimension);
        let mut block = Sha256::digest(text.as_bytes());
        while bytes.len() < self.dimension {
            bytes.extend_from_slice(block.as_slice());
            block = Sha256::digest(block.as_slice());
        }

        let mut vector: Vec<f32> = bytes[..self.dimension]
            .iter()
            .map(|&b| f32::from(b) / 255.0 - 0.5)
            .collect();

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

impl EmbeddingClient for StubEmbeddings {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| self.vector_for(text)).collect())
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn vectors_are_deterministic() {
        let client = StubEmbeddings::new(64);
        let texts = vec!["a note".to_string(), "a note".to_string()];
        let vectors = client.embed(&texts).unwrap();
        assert_eq!(vectors[0], vectors[1]);
    }

    #[test]
    fn distinct_texts_get_distinct_vectors() {
        let client = StubEmbeddings::new(64);
        let texts = vec!["first".to_string(), "second".to_string()];
        let vectors = client.embed(&texts).unwrap();
        assert_ne!(vectors[0], vectors[1]);
    }

    #[test]
    fn vectors_are_unit_length() {
        let client = StubEmbeddings::new(STUB_DIMENSION);
        let vectors = client
            .embed(&["normalise me".to_string()])
            .unwrap();
        let norm = vectors[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn model_id_carries_the_dimension() {
        assert_eq!(StubEmbeddings::new(256).model_id(), "stub-256");
    }
}
