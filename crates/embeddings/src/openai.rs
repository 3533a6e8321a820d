use crate::client::EmbeddingClient;
use crate::config::EmbeddingConfig;
use crate::error::{EmbeddingError, Result};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible embedding backend.
///
/// Issues blocking `POST {api_base}/embeddings` requests with bearer auth.
/// One request per batch, no retries; failures propagate to the caller.
#[derive(Debug)]
pub struct OpenAiEmbeddings {
    http: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

impl OpenAiEmbeddings {
    /// Create a backend from configuration. The API key must be present.
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(EmbeddingError::MissingApiKey("OPENAI_API_KEY"))?;

        Ok(Self {
            http: reqwest::blocking::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }
}

impl EmbeddingClient for OpenAiEmbeddings {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        log::debug!("Embedding {} texts with model {}", texts.len(), self.model);

        let url = format!("{}/embeddings", self.api_base);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest {
                model: &self.model,
                input: texts,
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::Api(format!("{status}: {body}")));
        }

        let mut parsed: EmbeddingResponse = response.json()?;
        if parsed.data.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                requested: texts.len(),
                received: parsed.data.len(),
            });
        }

        // The service reports each vector's position explicitly.
        parsed.data.sort_by_key(|item| item.index);
        Ok(parsed.data.into_iter().map(|item| item.embedding).collect())
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> EmbeddingConfig {
        EmbeddingConfig {
            api_base: "https://api.openai.com/v1/".to_string(),
            api_key: api_key.map(str::to_string),
            model: "text-embedding-3-small".to_string(),
            max_batch: 50,
        }
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = OpenAiEmbeddings::new(&config(None)).unwrap_err();
        assert!(matches!(err, EmbeddingError::MissingApiKey("OPENAI_API_KEY")));
    }

    #[test]
    fn trailing_slash_is_normalised() {
        let client = OpenAiEmbeddings::new(&config(Some("sk-test"))).unwrap();
        assert_eq!(client.api_base, "https://api.openai.com/v1");
        assert_eq!(client.model_id(), "text-embedding-3-small");
    }
}
