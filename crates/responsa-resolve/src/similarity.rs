//! String and token-set similarity measures.
//!
//! The fuzzy rating is Sørensen–Dice over character bigrams (symmetric,
//! order-insensitive, range [0, 1]); token overlap is Jaccard over the
//! significant-token sets. Both operate on full-normalized text.

use std::collections::HashSet;

/// Fuzzy rating between two already-normalized strings.
pub fn rating(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(a, b)
}

/// Jaccard overlap of two significant-token slices.
pub fn token_jaccard(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}
