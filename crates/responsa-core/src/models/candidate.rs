use serde::{Deserialize, Serialize};

use crate::catalog::FaqEntry;

/// One vector-index result: an entry-like payload plus a similarity
/// score in [0, 1], as returned by the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticHit {
    pub question: String,
    pub answer: String,
    pub score: f64,
}

/// A question/answer pair under consideration during fusion, annotated
/// with provenance and the scores derived for ranking. Ephemeral.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub entry: FaqEntry,
    pub from_semantic: bool,
    pub from_lexical: bool,
    /// Max semantic score observed across sources; 0 when lexical-only.
    pub semantic_score: f64,
    /// Bigram similarity between the normalized query and question.
    pub similarity: f64,
    /// Jaccard overlap of the significant-token sets.
    pub token_overlap: f64,
    /// Weighted signal combination plus heuristic adjustments; the
    /// ranking key.
    pub composite: f64,
}

impl Candidate {
    /// A candidate fresh out of the merge step, before scoring.
    pub fn unscored(entry: FaqEntry, from_semantic: bool, semantic_score: f64) -> Self {
        Self {
            entry,
            from_semantic,
            from_lexical: !from_semantic,
            semantic_score,
            similarity: 0.0,
            token_overlap: 0.0,
            composite: 0.0,
        }
    }
}
