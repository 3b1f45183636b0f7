//! Candidate fusion: merge semantic hits with lexical candidates drawn
//! from the catalog into one deduplicated sequence, then rank by
//! composite score.
//!
//! The collection is insertion-ordered (semantic in score order, then
//! lexical in catalog order) and the sort is stable, so tie-breaks are
//! deterministic and testable.

pub mod scorer;

use std::collections::HashMap;

use responsa_core::catalog::{Category, FaqEntry};
use responsa_core::models::{Candidate, SemanticHit};
use responsa_core::normalize::{self, NormalizedQuery};
use tracing::debug;

use crate::heuristics::Heuristics;
use scorer::ScorerWeights;

/// Merge, score, and rank candidates for one query.
pub fn fuse(
    semantic: &[SemanticHit],
    category: &Category,
    query: &NormalizedQuery,
    heuristics: &Heuristics,
    weights: &ScorerWeights,
    lexical_cap: usize,
) -> Vec<Candidate> {
    let mut ordered: Vec<Candidate> = Vec::new();
    // Dedup key is the full-normalized question text.
    let mut seen: HashMap<String, usize> = HashMap::new();

    for hit in semantic {
        let key = normalize::full(&hit.question);
        match seen.get(&key).copied() {
            Some(i) => {
                let candidate = &mut ordered[i];
                candidate.semantic_score = candidate.semantic_score.max(hit.score);
                candidate.from_semantic = true;
            }
            None => {
                seen.insert(key, ordered.len());
                ordered.push(Candidate::unscored(
                    FaqEntry {
                        question: hit.question.clone(),
                        answer: hit.answer.clone(),
                    },
                    true,
                    hit.score,
                ));
            }
        }
    }

    // Lexical candidates: any entry sharing a significant token with the
    // query, capped to bound cost on large catalogs.
    let mut lexical = 0usize;
    for entry in &category.entries {
        if lexical >= lexical_cap {
            debug!(lexical_cap, "lexical candidate cap reached");
            break;
        }
        let key = normalize::full(&entry.question);
        let tokens = normalize::tokens_of(&key);
        if !tokens.iter().any(|t| query.tokens.contains(t)) {
            continue;
        }
        lexical += 1;
        match seen.get(&key).copied() {
            Some(i) => ordered[i].from_lexical = true,
            None => {
                seen.insert(key, ordered.len());
                ordered.push(Candidate::unscored(entry.clone(), false, 0.0));
            }
        }
    }

    scorer::score(&mut ordered, query, heuristics, weights);

    // Stable sort keeps insertion order on equal composites.
    ordered.sort_by(|a, b| {
        b.composite
            .partial_cmp(&a.composite)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(candidates = ordered.len(), "fusion complete");
    ordered
}
