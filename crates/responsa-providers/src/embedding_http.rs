//! Client for the embedding microservice.
//!
//! Contract: `POST {base}/embed` with `{"texts": [text]}` returns
//! `{"vectors": [[f32, …]]}`. The core only ever sends single-text
//! requests; the batch shape is kept for wire compatibility with the
//! service.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use responsa_core::errors::RetrievalError;
use responsa_core::traits::IEmbeddingProvider;

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    texts: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    vectors: Vec<Vec<f32>>,
}

/// Blocking HTTP embedding provider.
pub struct HttpEmbeddingProvider {
    client: Client,
    endpoint: String,
}

impl HttpEmbeddingProvider {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| RetrievalError::EmbeddingFailed {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: format!("{}/embed", base_url.trim_end_matches('/')),
        })
    }
}

impl IEmbeddingProvider for HttpEmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&EmbedRequest { texts: [text] })
            .send()
            .map_err(|e| RetrievalError::EmbeddingFailed {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(RetrievalError::EmbeddingFailed {
                reason: format!("embedding service returned {}", response.status()),
            });
        }

        let body: EmbedResponse =
            response.json().map_err(|e| RetrievalError::MalformedResponse {
                reason: e.to_string(),
            })?;
        let vector = body
            .vectors
            .into_iter()
            .next()
            .ok_or_else(|| RetrievalError::MalformedResponse {
                reason: "empty vectors array".to_string(),
            })?;

        debug!(dims = vector.len(), "embedded query text");
        Ok(vector)
    }

    fn name(&self) -> &str {
        "embedding-http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_shape_is_stable() {
        let json = serde_json::to_string(&EmbedRequest {
            texts: ["what is margin"],
        })
        .unwrap();
        assert_eq!(json, r#"{"texts":["what is margin"]}"#);
    }

    #[test]
    fn response_parses_first_vector() {
        let body: EmbedResponse =
            serde_json::from_str(r#"{"vectors":[[0.1,0.2,0.3]]}"#).unwrap();
        assert_eq!(body.vectors[0], vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let provider = HttpEmbeddingProvider::new("http://localhost:5001/", 2_000).unwrap();
        assert_eq!(provider.endpoint, "http://localhost:5001/embed");
    }
}
