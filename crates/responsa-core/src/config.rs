//! Engine configuration.
//!
//! An explicit record passed into the orchestrator at construction; the
//! matching and scoring logic never reads ambient process state.

use serde::{Deserialize, Serialize};

/// Default values, named so tests and docs can reference them.
pub mod defaults {
    pub const GENERATIVE_MODEL: &str = "llama3";
    pub const GENERATIVE_TIMEOUT_MS: u64 = 8_000;
    /// Minimum composite score for accepting a fused candidate.
    pub const ACCEPT_THRESHOLD: f64 = 0.52;
    /// Minimum fuzzy rating for the strict local stage.
    pub const FUZZY_THRESHOLD: f64 = 0.6;
    /// Minimum fuzzy rating for the degraded fallback, relaxed so the
    /// fallback can catch near-misses the strict stage rejected.
    pub const DEGRADED_FUZZY_THRESHOLD: f64 = 0.5;
    /// Neighbors fetched from the vector index per query.
    pub const FETCH_K: usize = 10;
    /// Semantic hits considered by fusion and grounding.
    pub const CONSIDER_K: usize = 5;
    /// Upper bound on lexical candidates per query.
    pub const LEXICAL_CAP: usize = 50;
    /// Entries in the query-embedding cache.
    pub const EMBEDDING_CACHE_SIZE: u64 = 1_024;
}

/// Resolution pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Whether requests run generative augmentation unless they say
    /// otherwise.
    pub use_generative_by_default: bool,
    /// Model name handed to the generative provider.
    pub generative_model: String,
    /// Timeout for a single generative attempt, in milliseconds.
    pub generative_timeout_ms: u64,
    pub accept_threshold: f64,
    pub fuzzy_threshold: f64,
    pub degraded_fuzzy_threshold: f64,
    pub fetch_k: usize,
    pub consider_k: usize,
    pub lexical_cap: usize,
    pub embedding_cache_size: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            use_generative_by_default: false,
            generative_model: defaults::GENERATIVE_MODEL.to_string(),
            generative_timeout_ms: defaults::GENERATIVE_TIMEOUT_MS,
            accept_threshold: defaults::ACCEPT_THRESHOLD,
            fuzzy_threshold: defaults::FUZZY_THRESHOLD,
            degraded_fuzzy_threshold: defaults::DEGRADED_FUZZY_THRESHOLD,
            fetch_k: defaults::FETCH_K,
            consider_k: defaults::CONSIDER_K,
            lexical_cap: defaults::LEXICAL_CAP,
            embedding_cache_size: defaults::EMBEDDING_CACHE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ResolverConfig::default();
        assert!(!config.use_generative_by_default);
        assert!(config.accept_threshold < config.fuzzy_threshold);
        assert!(config.degraded_fuzzy_threshold < config.fuzzy_threshold);
        assert!(config.consider_k <= config.fetch_k);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{ "use_generative_by_default": true }"#).unwrap();
        assert!(config.use_generative_by_default);
        assert_eq!(config.fetch_k, defaults::FETCH_K);
    }
}
