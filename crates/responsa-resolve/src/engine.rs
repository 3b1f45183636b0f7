//! ResolutionEngine: implements `IResolver`, sequences the full
//! fallback cascade.
//!
//! Stage order: input validation → category lookup → local matcher
//! (rule / exact / fuzzy) → semantic retrieval → fusion + composite
//! threshold → optional generative rewrite. Retrieval failures degrade
//! once to a relaxed local fuzzy pass; generative failures always
//! degrade to the retrieved answer.

use responsa_core::catalog::Category;
use responsa_core::config::ResolverConfig;
use responsa_core::errors::{ResolveError, ResolveResult, RetrievalError};
use responsa_core::models::{Candidate, ResolveMode, ResolveRequest, Resolution};
use responsa_core::normalize::NormalizedQuery;
use responsa_core::traits::{ICatalog, IEmbeddingProvider, IGenerator, IResolver, IVectorIndex};
use tracing::{debug, info, warn};

use crate::augment;
use crate::fusion;
use crate::fusion::scorer::ScorerWeights;
use crate::heuristics::Heuristics;
use crate::matcher::LocalMatcher;
use crate::retriever::SemanticRetriever;

/// Orchestrates the fallback cascade over one catalog.
///
/// Holds only shared-readable state, so a transport layer can put it
/// behind an `Arc` and resolve concurrent requests.
pub struct ResolutionEngine<'a> {
    catalog: &'a dyn ICatalog,
    generator: Option<&'a dyn IGenerator>,
    retriever: SemanticRetriever<'a>,
    matcher: LocalMatcher,
    heuristics: Heuristics,
    weights: ScorerWeights,
    config: ResolverConfig,
}

impl<'a> ResolutionEngine<'a> {
    pub fn new(
        catalog: &'a dyn ICatalog,
        embedder: &'a dyn IEmbeddingProvider,
        index: &'a dyn IVectorIndex,
        config: ResolverConfig,
    ) -> Self {
        let heuristics = Heuristics::default();
        let matcher = LocalMatcher::new(heuristics.intent.clone(), config.fuzzy_threshold);
        let retriever =
            SemanticRetriever::new(embedder, index, config.fetch_k, config.embedding_cache_size);
        Self {
            catalog,
            generator: None,
            retriever,
            matcher,
            heuristics,
            weights: ScorerWeights::default(),
            config,
        }
    }

    /// Attach a generative backend for answer augmentation.
    pub fn with_generator(mut self, generator: &'a dyn IGenerator) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Replace the default heuristic tables.
    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.matcher = LocalMatcher::new(heuristics.intent.clone(), self.config.fuzzy_threshold);
        self.heuristics = heuristics;
        self
    }

    /// Replace the default scorer weights.
    pub fn with_weights(mut self, weights: ScorerWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Resolve one request through the full cascade.
    pub fn resolve(&self, request: &ResolveRequest) -> ResolveResult<Resolution> {
        if request.category.trim().is_empty() {
            return Err(ResolveError::MissingInput { field: "category" });
        }
        if request.question.trim().is_empty() {
            return Err(ResolveError::MissingInput { field: "question" });
        }

        let category = self.catalog.category(&request.category).ok_or_else(|| {
            ResolveError::CategoryNotFound {
                name: request.category.clone(),
            }
        })?;

        let query = NormalizedQuery::of(&request.question);
        let generative = request
            .use_generative
            .unwrap_or(self.config.use_generative_by_default);

        // Local cascade: rule override, exact, strict fuzzy.
        if let Some(m) = self.matcher.find(&query, &category) {
            info!(mode = %m.mode, score = m.score, "resolved locally");
            return Ok(Resolution {
                question: m.entry.question,
                answer: m.entry.answer,
                score: m.score,
                mode: m.mode,
                note: None,
            });
        }

        // Semantic retrieval, degrading on infrastructure failure.
        let hits = match self.retriever.retrieve(&query.light, &category.name) {
            Ok(hits) => hits,
            Err(err) => return self.degraded(&query, &category, generative, err),
        };

        let considered = &hits[..hits.len().min(self.config.consider_k)];
        let candidates = fusion::fuse(
            considered,
            &category,
            &query,
            &self.heuristics,
            &self.weights,
            self.config.lexical_cap,
        );

        let Some(top) = candidates.first() else {
            debug!("no candidates after fusion");
            return Err(ResolveError::NoConfidentMatch);
        };
        if top.composite < self.config.accept_threshold {
            debug!(
                composite = top.composite,
                threshold = self.config.accept_threshold,
                "top candidate below acceptance threshold"
            );
            return Err(ResolveError::NoConfidentMatch);
        }

        let accepted = top.clone();
        info!(
            question = %accepted.entry.question,
            composite = accepted.composite,
            "fused candidate accepted"
        );

        let mut note = None;
        if generative {
            match self.augmented(&request.question, &candidates) {
                Ok(answer) => {
                    return Ok(Resolution {
                        question: accepted.entry.question,
                        answer,
                        score: accepted.composite,
                        mode: ResolveMode::Generative,
                        note: None,
                    });
                }
                Err(reason) => {
                    warn!(%reason, "augmentation unavailable, returning retrieved answer");
                    note = Some(format!("generative augmentation skipped: {reason}"));
                }
            }
        }

        Ok(Resolution {
            question: accepted.entry.question,
            answer: accepted.entry.answer,
            score: accepted.composite,
            mode: ResolveMode::Fused,
            note,
        })
    }

    /// One generative attempt grounded on the ranked candidates.
    fn augmented(&self, raw_question: &str, candidates: &[Candidate]) -> Result<String, String> {
        let Some(generator) = self.generator else {
            return Err("no generative backend configured".to_string());
        };
        let prompt = augment::build_prompt(raw_question, candidates, self.config.consider_k);
        match generator.generate(&prompt) {
            Ok(completion) if augment::is_usable(&completion) => {
                Ok(completion.trim().to_string())
            }
            Ok(_) => Err("backend declined to answer from the context".to_string()),
            Err(err) => Err(err.to_string()),
        }
    }

    /// Single-step degradation after a retrieval infrastructure
    /// failure: local fuzzy at the relaxed threshold, then an optional
    /// ungrounded generative attempt, then the original error.
    fn degraded(
        &self,
        query: &NormalizedQuery,
        category: &Category,
        generative: bool,
        err: RetrievalError,
    ) -> ResolveResult<Resolution> {
        warn!(error = %err, "retrieval infrastructure failed, attempting local fallback");

        if let Some((entry, rating)) = self.matcher.best_fuzzy(query, category) {
            if rating >= self.config.degraded_fuzzy_threshold {
                info!(score = rating, "degraded local fallback hit");
                return Ok(Resolution {
                    question: entry.question,
                    answer: entry.answer,
                    score: rating,
                    mode: ResolveMode::FallbackLocal,
                    note: Some(format!("semantic retrieval unavailable: {err}")),
                });
            }
        }

        if generative {
            if let Some(generator) = self.generator {
                let prompt = augment::build_prompt(&query.raw, &[], 0);
                match generator.generate(&prompt) {
                    Ok(completion) if augment::is_usable(&completion) => {
                        warn!("answering generatively with no retrieval context");
                        return Ok(Resolution {
                            question: query.raw.clone(),
                            answer: completion.trim().to_string(),
                            score: 0.0,
                            mode: ResolveMode::GenerativeOnly,
                            note: Some(format!("semantic retrieval unavailable: {err}")),
                        });
                    }
                    Ok(_) => {}
                    Err(gen_err) => {
                        warn!(error = %gen_err, "ungrounded generative attempt failed");
                    }
                }
            }
        }

        Err(err.into())
    }
}

impl IResolver for ResolutionEngine<'_> {
    fn resolve(&self, request: &ResolveRequest) -> ResolveResult<Resolution> {
        ResolutionEngine::resolve(self, request)
    }
}
