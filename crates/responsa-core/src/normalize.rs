//! Two-level text canonicalization used by every matching stage.
//!
//! `light` feeds category-name comparison and the semantic retriever;
//! `full` adds punctuation stripping and whole-word synonym folding and
//! feeds exact, fuzzy, and lexical matching. All call sites route through
//! this module so the two levels never drift apart.

/// Punctuation stripped by full normalization.
const PUNCTUATION: &[char] = &[
    '?', '.', '!', ',', ':', ';', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Whole-word substitutions applied in order by full normalization.
/// Maps informal spellings to the catalog's canonical spelling.
/// Replacements are token-level, never substring, so unrelated words
/// stay intact.
const SYNONYMS: &[(&str, &str)] = &[
    ("e-mail", "email"),
    ("pwd", "password"),
    ("acct", "account"),
    ("signup", "sign up"),
];

/// Function words excluded from token-based computations.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "to", "of",
    "in", "on", "at", "by", "for", "and", "or", "do", "does", "did", "can",
    "could", "will", "would", "what", "how", "when", "where", "who", "why",
    "i", "my", "me", "you", "your", "it", "its", "this", "that", "with",
];

/// Tokens shorter than this are excluded from overlap and keyword checks.
/// They still count toward the canonical string used for exact matching.
const MIN_TOKEN_LEN: usize = 3;

/// Light normalization: lowercase, collapse whitespace runs, trim.
pub fn light(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Full normalization: `light`, strip punctuation, fold synonyms.
pub fn full(s: &str) -> String {
    let stripped: String = light(s)
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();
    // Stripping can leave doubled spaces ("word , word"), so re-collapse.
    let mut text = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    for (from, to) in SYNONYMS {
        text = text
            .split(' ')
            .map(|w| if w == *from { *to } else { w })
            .collect::<Vec<_>>()
            .join(" ");
    }
    text
}

/// Significant tokens of an already full-normalized string: split on
/// single spaces, drop stopwords and tokens shorter than [`MIN_TOKEN_LEN`].
pub fn tokens_of(full_text: &str) -> Vec<String> {
    full_text
        .split(' ')
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Significant tokens of a raw string.
pub fn significant_tokens(s: &str) -> Vec<String> {
    tokens_of(&full(s))
}

/// Both normalization levels plus the significant-token set for one
/// query, computed once and threaded through the pipeline. Ephemeral,
/// never persisted.
#[derive(Debug, Clone)]
pub struct NormalizedQuery {
    pub raw: String,
    pub light: String,
    pub full: String,
    pub tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn of(raw: &str) -> Self {
        let light = light(raw);
        let full = full(raw);
        let tokens = tokens_of(&full);
        Self {
            raw: raw.to_string(),
            light,
            full,
            tokens,
        }
    }
}
