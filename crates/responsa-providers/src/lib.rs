//! # responsa-providers
//!
//! Blocking HTTP adapters for the three external collaborators: an
//! embedding microservice, a Qdrant-compatible vector index, and an
//! Ollama-compatible generative backend.
//!
//! Each adapter is a thin client with a bounded timeout and no retries;
//! failure policy lives in the resolution engine, not here.

pub mod embedding_http;
pub mod ollama;
pub mod qdrant;

pub use embedding_http::HttpEmbeddingProvider;
pub use ollama::OllamaGenerator;
pub use qdrant::QdrantIndex;
