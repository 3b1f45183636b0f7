//! Qdrant REST search client.
//!
//! Queries `POST {base}/collections/{collection}/points/search` with a
//! category payload filter, so cross-category isolation is enforced
//! server-side rather than by post-filtering.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use responsa_core::errors::RetrievalError;
use responsa_core::models::SemanticHit;
use responsa_core::traits::IVectorIndex;

/// Payload field carrying the category tag of each indexed point.
const CATEGORY_KEY: &str = "category";

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    vector: &'a [f32],
    filter: Filter<'a>,
    top: usize,
    with_payload: bool,
}

#[derive(Debug, Serialize)]
struct Filter<'a> {
    must: [Condition<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Condition<'a> {
    key: &'a str,
    #[serde(rename = "match")]
    matches: MatchValue<'a>,
}

#[derive(Debug, Serialize)]
struct MatchValue<'a> {
    value: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<ScoredPoint>,
}

#[derive(Debug, Deserialize)]
struct ScoredPoint {
    score: f64,
    payload: Payload,
}

#[derive(Debug, Deserialize)]
struct Payload {
    question: String,
    answer: String,
}

/// Blocking client for one Qdrant collection.
pub struct QdrantIndex {
    client: Client,
    endpoint: String,
}

impl QdrantIndex {
    pub fn new(
        base_url: &str,
        collection: &str,
        timeout_ms: u64,
    ) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| RetrievalError::IndexSearchFailed {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: format!(
                "{}/collections/{}/points/search",
                base_url.trim_end_matches('/'),
                collection
            ),
        })
    }
}

impl IVectorIndex for QdrantIndex {
    fn search(
        &self,
        vector: &[f32],
        category: &str,
        top_k: usize,
    ) -> Result<Vec<SemanticHit>, RetrievalError> {
        let request = SearchRequest {
            vector,
            filter: Filter {
                must: [Condition {
                    key: CATEGORY_KEY,
                    matches: MatchValue { value: category },
                }],
            },
            top: top_k,
            with_payload: true,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| RetrievalError::IndexSearchFailed {
                reason: e.to_string(),
            })?;

        // Qdrant rejects dimension mismatches and bad filters with 4xx.
        if !response.status().is_success() {
            return Err(RetrievalError::IndexSearchFailed {
                reason: format!("index returned {}", response.status()),
            });
        }

        let body: SearchResponse =
            response.json().map_err(|e| RetrievalError::MalformedResponse {
                reason: e.to_string(),
            })?;

        let hits: Vec<SemanticHit> = body
            .result
            .into_iter()
            .map(|point| SemanticHit {
                question: point.payload.question,
                answer: point.payload.answer,
                score: point.score,
            })
            .collect();

        debug!(hits = hits.len(), category, "vector index search complete");
        Ok(hits)
    }

    fn name(&self) -> &str {
        "qdrant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_carries_the_category_filter() {
        let vector = [0.1f32, 0.2];
        let request = SearchRequest {
            vector: &vector,
            filter: Filter {
                must: [Condition {
                    key: CATEGORY_KEY,
                    matches: MatchValue { value: "Trading" },
                }],
            },
            top: 10,
            with_payload: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["filter"]["must"][0]["key"], "category");
        assert_eq!(json["filter"]["must"][0]["match"]["value"], "Trading");
        assert_eq!(json["top"], 10);
        assert_eq!(json["with_payload"], true);
    }

    #[test]
    fn response_maps_payloads_to_hits() {
        let body: SearchResponse = serde_json::from_str(
            r#"{
                "result": [
                    {
                        "score": 0.91,
                        "payload": { "question": "What is margin?", "answer": "Borrowed funds." }
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(body.result.len(), 1);
        assert_eq!(body.result[0].payload.question, "What is margin?");
    }

    #[test]
    fn missing_result_field_parses_as_empty() {
        let body: SearchResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(body.result.is_empty());
    }

    #[test]
    fn endpoint_targets_the_collection() {
        let index = QdrantIndex::new("http://localhost:6333", "faq_semantic", 2_000).unwrap();
        assert_eq!(
            index.endpoint,
            "http://localhost:6333/collections/faq_semantic/points/search"
        );
    }
}
