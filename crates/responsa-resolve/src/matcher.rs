//! Local matching against one category's entries.
//!
//! Rule override, exact, then fuzzy, in strict order; first success
//! wins. Everything here is in-memory and deterministic, which is why
//! the cascade runs it before touching any external provider.

use responsa_core::catalog::{Category, FaqEntry};
use responsa_core::models::ResolveMode;
use responsa_core::normalize::{self, NormalizedQuery};
use tracing::debug;

use crate::heuristics::IntentRule;
use crate::similarity;

/// Confidence assigned to rule-override hits.
const RULE_SCORE: f64 = 0.99;

/// A local match with its score and resolving mode.
#[derive(Debug, Clone)]
pub struct LocalMatch {
    pub entry: FaqEntry,
    pub score: f64,
    pub mode: ResolveMode,
}

/// Exact and fuzzy search restricted to one category.
pub struct LocalMatcher {
    intent: IntentRule,
    fuzzy_threshold: f64,
}

impl LocalMatcher {
    pub fn new(intent: IntentRule, fuzzy_threshold: f64) -> Self {
        Self {
            intent,
            fuzzy_threshold,
        }
    }

    /// Run the local cascade. `None` falls through to semantic
    /// retrieval.
    pub fn find(&self, query: &NormalizedQuery, category: &Category) -> Option<LocalMatch> {
        if let Some(entry) = self.rule_override(query, category) {
            debug!(question = %entry.question, "informational rule override hit");
            return Some(LocalMatch {
                entry,
                score: RULE_SCORE,
                mode: ResolveMode::Rule,
            });
        }

        if let Some(entry) = self.exact(query, category) {
            debug!(question = %entry.question, "exact match");
            return Some(LocalMatch {
                entry,
                score: 1.0,
                mode: ResolveMode::Exact,
            });
        }

        if let Some((entry, rating)) = self.best_fuzzy(query, category) {
            if rating >= self.fuzzy_threshold {
                debug!(question = %entry.question, rating, "local fuzzy match");
                return Some(LocalMatch {
                    entry,
                    score: rating,
                    mode: ResolveMode::LocalFuzzy,
                });
            }
        }

        None
    }

    /// Overview-style queries short-circuit to the first entry that is
    /// itself informational and contains every content token of the
    /// query. The markers signal intent; the content tokens carry the
    /// subject and are what must appear in the entry.
    fn rule_override(&self, query: &NormalizedQuery, category: &Category) -> Option<FaqEntry> {
        if !self.intent.query_is_informational(&query.tokens) {
            return None;
        }
        let content = self.intent.content_tokens(&query.tokens);
        category
            .entries
            .iter()
            .find(|e| {
                let tokens = normalize::significant_tokens(&e.question);
                self.intent.entry_is_informational(&tokens)
                    && content.iter().all(|t| tokens.contains(*t))
            })
            .cloned()
    }

    fn exact(&self, query: &NormalizedQuery, category: &Category) -> Option<FaqEntry> {
        category
            .entries
            .iter()
            .find(|e| normalize::full(&e.question) == query.full)
            .cloned()
    }

    /// Best fuzzy entry and its rating, regardless of threshold. Ties
    /// keep the first entry in catalog order. The degraded fallback
    /// reuses this with its own, relaxed threshold.
    pub fn best_fuzzy(
        &self,
        query: &NormalizedQuery,
        category: &Category,
    ) -> Option<(FaqEntry, f64)> {
        let mut best: Option<(FaqEntry, f64)> = None;
        for entry in &category.entries {
            let rating = similarity::rating(&query.full, &normalize::full(&entry.question));
            match &best {
                Some((_, top)) if rating <= *top => {}
                _ => best = Some((entry.clone(), rating)),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category() -> Category {
        Category {
            name: "Trading".to_string(),
            entries: vec![
                FaqEntry {
                    question: "What is the purpose of the watchlist?".to_string(),
                    answer: "It tracks instruments you follow.".to_string(),
                },
                FaqEntry {
                    question: "What margin information is displayed in the app?".to_string(),
                    answer: "Current usage, requirements, and available margin.".to_string(),
                },
                FaqEntry {
                    question: "How do I reset my password?".to_string(),
                    answer: "Use the reset link on the sign-in page.".to_string(),
                },
            ],
        }
    }

    fn matcher() -> LocalMatcher {
        LocalMatcher::new(IntentRule::default(), 0.6)
    }

    #[test]
    fn exact_match_ignores_case_spacing_and_punctuation() {
        let query = NormalizedQuery::of("  HOW do i   RESET my password ?!");
        let hit = matcher().find(&query, &category()).unwrap();
        assert_eq!(hit.mode, ResolveMode::Exact);
        assert_eq!(hit.score, 1.0);
        assert_eq!(hit.entry.answer, "Use the reset link on the sign-in page.");
    }

    #[test]
    fn rule_override_prefers_informational_entries() {
        let query = NormalizedQuery::of("where can I see my margin?");
        let hit = matcher().find(&query, &category()).unwrap();
        assert_eq!(hit.mode, ResolveMode::Rule);
        assert_eq!(hit.score, 0.99);
        assert!(hit.entry.question.contains("margin information"));
    }

    #[test]
    fn rule_override_requires_content_tokens_to_match() {
        // Informational phrasing, but the subject is absent from every
        // informational entry.
        let query = NormalizedQuery::of("where can I see my tax report?");
        let hit = matcher().find(&query, &category());
        assert!(hit.is_none() || hit.unwrap().mode != ResolveMode::Rule);
    }

    #[test]
    fn fuzzy_match_accepts_near_misses_above_threshold() {
        let query = NormalizedQuery::of("how to reset my password");
        let hit = matcher().find(&query, &category()).unwrap();
        assert_eq!(hit.mode, ResolveMode::LocalFuzzy);
        assert!(hit.score >= 0.6 && hit.score < 1.0);
    }

    #[test]
    fn unrelated_query_falls_through() {
        let query = NormalizedQuery::of("when does the exchange open on holidays");
        assert!(matcher().find(&query, &category()).is_none());
    }

    #[test]
    fn empty_category_yields_none() {
        let empty = Category {
            name: "Empty".to_string(),
            entries: vec![],
        };
        let query = NormalizedQuery::of("anything at all");
        assert!(matcher().find(&query, &empty).is_none());
        assert!(matcher().best_fuzzy(&query, &empty).is_none());
    }

    #[test]
    fn fuzzy_ties_keep_catalog_order() {
        let twins = Category {
            name: "Twins".to_string(),
            entries: vec![
                FaqEntry {
                    question: "alpha beta gamma".to_string(),
                    answer: "first".to_string(),
                },
                FaqEntry {
                    question: "alpha beta gamma".to_string(),
                    answer: "second".to_string(),
                },
            ],
        };
        let query = NormalizedQuery::of("alpha beta delta");
        let (entry, _) = matcher().best_fuzzy(&query, &twins).unwrap();
        assert_eq!(entry.answer, "first");
    }
}
