//! Declarative scoring heuristics.
//!
//! Domain knowledge lives in data tables evaluated uniformly by the
//! scorer and the matcher's rule override. New heuristics are rows, not
//! code branches, so deployments with catalogs in another language swap
//! the tables instead of patching the scorer.

/// Score adjustment armed by a domain-sensitive keyword in the query.
///
/// Generic similarity under-weights a single decisive term; once armed,
/// candidates carrying the term are lifted and the rest are pushed down.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    /// Tokens that arm the rule when present in the query.
    pub triggers: Vec<String>,
    /// Added to candidates whose question contains a trigger.
    pub bonus: f64,
    /// Added to candidates whose question does not.
    pub penalty: f64,
}

impl KeywordRule {
    /// Whether the query's significant tokens arm this rule.
    pub fn triggered_by(&self, query_tokens: &[String]) -> bool {
        query_tokens.iter().any(|t| self.triggers.contains(t))
    }

    /// Adjustment for a candidate question's token set, once armed.
    pub fn adjustment(&self, question_tokens: &[String]) -> f64 {
        if question_tokens.iter().any(|t| self.triggers.contains(t)) {
            self.bonus
        } else {
            self.penalty
        }
    }
}

/// Markers and adjustments for overview-style ("informational") queries.
///
/// Similarity scoring tends to rank narrow entries above overview
/// entries for overview-style questions; this rule counteracts that.
/// One instance backs both the matcher's rule override and the scorer's
/// intent adjustment so the two stages can never disagree on what
/// counts as informational.
#[derive(Debug, Clone)]
pub struct IntentRule {
    /// Query tokens that signal informational intent.
    pub query_markers: Vec<String>,
    /// Tokens that mark an entry's question as informational.
    pub entry_markers: Vec<String>,
    /// Tokens that mark an entry's question as a narrow purpose or
    /// function question.
    pub narrow_markers: Vec<String>,
    /// Bonus when the candidate question leads with an entry marker.
    pub lead_bonus: f64,
    /// Bonus when it merely contains one.
    pub contain_bonus: f64,
    /// Penalty for narrow candidates under informational intent.
    pub narrow_penalty: f64,
}

impl IntentRule {
    /// Whether the query's significant tokens express informational
    /// intent.
    pub fn query_is_informational(&self, query_tokens: &[String]) -> bool {
        query_tokens.iter().any(|t| self.query_markers.contains(t))
    }

    /// The query's tokens minus the intent markers themselves. The rule
    /// override requires these, not the markers, to appear in the entry.
    pub fn content_tokens<'t>(&self, query_tokens: &'t [String]) -> Vec<&'t String> {
        query_tokens
            .iter()
            .filter(|t| !self.query_markers.contains(*t))
            .collect()
    }

    /// Whether a question's token set contains an entry marker.
    pub fn entry_is_informational(&self, question_tokens: &[String]) -> bool {
        question_tokens.iter().any(|t| self.entry_markers.contains(t))
    }

    /// Whether the first significant token is an entry marker.
    pub fn entry_leads_informational(&self, question_tokens: &[String]) -> bool {
        question_tokens
            .first()
            .is_some_and(|t| self.entry_markers.contains(t))
    }

    /// Whether the question reads as a narrow purpose/function question.
    pub fn entry_is_narrow(&self, question_tokens: &[String]) -> bool {
        question_tokens.iter().any(|t| self.narrow_markers.contains(t))
    }
}

impl Default for IntentRule {
    fn default() -> Self {
        Self {
            query_markers: strings(&[
                "see", "view", "look", "show", "shown", "display", "displayed",
                "information", "info", "overview",
            ]),
            entry_markers: strings(&[
                "information", "overview", "display", "displayed", "shown",
            ]),
            narrow_markers: strings(&["purpose", "function", "use", "used"]),
            lead_bonus: 0.35,
            contain_bonus: 0.20,
            narrow_penalty: -0.25,
        }
    }
}

/// The full heuristic table consumed by the scorer.
#[derive(Debug, Clone)]
pub struct Heuristics {
    pub intent: IntentRule,
    pub keywords: Vec<KeywordRule>,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            intent: IntentRule::default(),
            keywords: vec![
                KeywordRule {
                    triggers: strings(&["margin"]),
                    bonus: 0.12,
                    penalty: -0.06,
                },
                KeywordRule {
                    triggers: strings(&["dividend", "dividends"]),
                    bonus: 0.12,
                    penalty: -0.06,
                },
            ],
        }
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
