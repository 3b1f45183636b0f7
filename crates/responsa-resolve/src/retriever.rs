//! Semantic retrieval through the embedding provider and vector index.
//!
//! Failures surface as typed errors rather than empty results: an empty
//! result is a valid "no match" and must stay distinguishable from an
//! infrastructure failure. Query embeddings are memoized in a bounded
//! in-memory cache.

use std::time::Duration;

use moka::sync::Cache;
use responsa_core::errors::RetrievalError;
use responsa_core::models::SemanticHit;
use responsa_core::traits::{IEmbeddingProvider, IVectorIndex};
use tracing::debug;

/// Fetches top-K semantically similar entries for one category.
pub struct SemanticRetriever<'a> {
    embedder: &'a dyn IEmbeddingProvider,
    index: &'a dyn IVectorIndex,
    /// Query-embedding memoization, keyed by light-normalized text.
    cache: Cache<String, Vec<f32>>,
    fetch_k: usize,
}

impl<'a> SemanticRetriever<'a> {
    pub fn new(
        embedder: &'a dyn IEmbeddingProvider,
        index: &'a dyn IVectorIndex,
        fetch_k: usize,
        cache_size: u64,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(cache_size)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self {
            embedder,
            index,
            cache,
            fetch_k,
        }
    }

    /// Embed the light-normalized query and fetch nearest neighbors,
    /// filtered server-side by category.
    pub fn retrieve(
        &self,
        light_query: &str,
        category: &str,
    ) -> Result<Vec<SemanticHit>, RetrievalError> {
        let vector = match self.cache.get(light_query) {
            Some(vector) => vector,
            None => {
                let vector = self.embedder.embed(light_query)?;
                self.cache.insert(light_query.to_string(), vector.clone());
                vector
            }
        };

        let hits = self.index.search(&vector, category, self.fetch_k)?;
        debug!(
            hits = hits.len(),
            category,
            provider = self.embedder.name(),
            index = self.index.name(),
            "semantic retrieval complete"
        );
        Ok(hits)
    }
}
