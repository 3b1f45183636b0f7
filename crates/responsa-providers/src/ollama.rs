//! Ollama generate-endpoint client.
//!
//! One non-streaming request per call, bounded by the configured
//! timeout. Every failure maps to a typed `GenerativeError`; the engine
//! absorbs all of them.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use responsa_core::errors::GenerativeError;
use responsa_core::traits::IGenerator;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Blocking client for an Ollama-compatible backend.
pub struct OllamaGenerator {
    client: Client,
    endpoint: String,
    model: String,
    timeout_ms: u64,
}

impl OllamaGenerator {
    pub fn new(base_url: &str, model: &str, timeout_ms: u64) -> Result<Self, GenerativeError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| GenerativeError::Unreachable {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
            model: model.to_string(),
            timeout_ms,
        })
    }
}

impl IGenerator for OllamaGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerativeError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    GenerativeError::TimedOut {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    GenerativeError::Unreachable {
                        reason: e.to_string(),
                    }
                }
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GenerativeError::ModelNotFound {
                model: self.model.clone(),
            });
        }
        if !response.status().is_success() {
            return Err(GenerativeError::Unreachable {
                reason: format!("backend returned {}", response.status()),
            });
        }

        let body: GenerateResponse =
            response.json().map_err(|e| GenerativeError::Unreachable {
                reason: e.to_string(),
            })?;
        if body.response.trim().is_empty() {
            return Err(GenerativeError::EmptyCompletion);
        }

        debug!(model = %self.model, chars = body.response.len(), "generation complete");
        Ok(body.response)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
