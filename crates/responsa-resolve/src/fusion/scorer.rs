//! Composite relevance scoring.
//!
//! `composite = w_semantic·semantic + w_similarity·similarity
//! + w_overlap·token_overlap + keyword and intent adjustments`.
//! The weighted part stays in [0, 1]; adjustments can push the total
//! outside it, and the acceptance threshold is calibrated against that
//! range so it stays meaningful across query shapes.

use responsa_core::models::Candidate;
use responsa_core::normalize::{self, NormalizedQuery};

use crate::heuristics::Heuristics;
use crate::similarity;

/// Weights for the three similarity signals.
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    pub semantic: f64,
    pub similarity: f64,
    pub token_overlap: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            semantic: 0.60,
            similarity: 0.28,
            token_overlap: 0.12,
        }
    }
}

/// Fill in the derived scores for every candidate, in place.
pub fn score(
    candidates: &mut [Candidate],
    query: &NormalizedQuery,
    heuristics: &Heuristics,
    weights: &ScorerWeights,
) {
    let informational = heuristics.intent.query_is_informational(&query.tokens);
    let armed: Vec<_> = heuristics
        .keywords
        .iter()
        .filter(|rule| rule.triggered_by(&query.tokens))
        .collect();

    for candidate in candidates {
        let full = normalize::full(&candidate.entry.question);
        let tokens = normalize::tokens_of(&full);

        candidate.similarity = similarity::rating(&query.full, &full);
        candidate.token_overlap = similarity::token_jaccard(&query.tokens, &tokens);

        let mut adjustment = 0.0;
        for rule in &armed {
            adjustment += rule.adjustment(&tokens);
        }
        if informational {
            if heuristics.intent.entry_leads_informational(&tokens) {
                adjustment += heuristics.intent.lead_bonus;
            } else if heuristics.intent.entry_is_informational(&tokens) {
                adjustment += heuristics.intent.contain_bonus;
            }
            if heuristics.intent.entry_is_narrow(&tokens) {
                adjustment += heuristics.intent.narrow_penalty;
            }
        }

        candidate.composite = weights.semantic * candidate.semantic_score
            + weights.similarity * candidate.similarity
            + weights.token_overlap * candidate.token_overlap
            + adjustment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use responsa_core::catalog::FaqEntry;

    fn candidate(question: &str, semantic_score: f64) -> Candidate {
        Candidate::unscored(
            FaqEntry {
                question: question.to_string(),
                answer: "answer".to_string(),
            },
            semantic_score > 0.0,
            semantic_score,
        )
    }

    fn scored(question: &str, semantic_score: f64, query: &str) -> Candidate {
        let mut candidates = vec![candidate(question, semantic_score)];
        score(
            &mut candidates,
            &NormalizedQuery::of(query),
            &Heuristics::default(),
            &ScorerWeights::default(),
        );
        candidates.pop().unwrap()
    }

    #[test]
    fn identical_text_maxes_similarity_signals() {
        let c = scored("what is a stop order", 0.0, "What is a stop order?");
        assert_eq!(c.similarity, 1.0);
        assert_eq!(c.token_overlap, 1.0);
        let expected = 0.28 + 0.12;
        assert!((c.composite - expected).abs() < 1e-9);
    }

    #[test]
    fn semantic_score_dominates_the_weighting() {
        let high = scored("completely unrelated words here", 1.0, "zzz qqq");
        assert!((high.composite - 0.60).abs() < 1e-9);
    }

    #[test]
    fn keyword_bonus_outranks_keyword_penalty() {
        let query = "margin fees";
        let with = scored("fees on margin accounts", 0.5, query);
        let without = scored("fees on cash accounts", 0.5, query);
        assert!(with.composite > without.composite);
        // The armed rule contributes a fixed 0.18 spread on top of the
        // similarity deltas.
        let spread = with.composite - without.composite;
        assert!(spread > 0.12);
    }

    #[test]
    fn informational_query_boosts_overview_entries() {
        let query = "what can i see about my margin";
        let overview = scored("what margin information is displayed", 0.5, query);
        let narrow = scored("what is the purpose of margin", 0.5, query);
        assert!(overview.composite > narrow.composite);
    }

    #[test]
    fn leading_marker_beats_contained_marker() {
        let query = "show me my account overview";
        let mut candidates = vec![
            candidate("information shown for each account", 0.5),
            candidate("which account fields hold information", 0.5),
        ];
        score(
            &mut candidates,
            &NormalizedQuery::of(query),
            &Heuristics::default(),
            &ScorerWeights::default(),
        );
        // First leads with a marker (+0.35), second merely contains one
        // (+0.20); the lead bonus must win the tie between them.
        assert!(candidates[0].composite > candidates[1].composite);
    }

    #[test]
    fn no_adjustments_without_triggers() {
        let c = scored("how to place a limit order", 0.0, "placing a limit order");
        let weighted = 0.28 * c.similarity + 0.12 * c.token_overlap;
        assert!((c.composite - weighted).abs() < 1e-9);
    }
}
