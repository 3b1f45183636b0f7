//! Catalog types and the bundled in-memory accessor.

use serde::{Deserialize, Serialize};

use crate::normalize;
use crate::traits::ICatalog;

/// One question/answer pair. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A named, ordered sequence of FAQ entries.
///
/// Entry order is display order; matching only consults it as a
/// tie-break. Name uniqueness is the management collaborator's problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<FaqEntry>,
}

/// Read-only catalog held fully in memory, treated as immutable for the
/// duration of every resolution.
pub struct InMemoryCatalog {
    categories: Vec<Category>,
}

impl InMemoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parse a catalog from a JSON array of
    /// `{ "name": …, "entries": [{ "question": …, "answer": … }] }`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl ICatalog for InMemoryCatalog {
    fn category(&self, name: &str) -> Option<Category> {
        let wanted = normalize::light(name);
        self.categories
            .iter()
            .find(|c| normalize::light(&c.name) == wanted)
            .cloned()
    }

    fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }
}
