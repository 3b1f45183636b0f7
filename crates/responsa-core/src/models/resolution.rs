use serde::{Deserialize, Serialize};

/// A resolution request as accepted from the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub category: String,
    pub question: String,
    /// Overrides the configured default when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_generative: Option<bool>,
}

/// Which stage of the cascade resolved the request.
///
/// Observability only; the pipeline never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolveMode {
    /// Informational-intent rule override.
    Rule,
    /// Exact full-normalized match.
    Exact,
    /// Local fuzzy match above the strict threshold.
    LocalFuzzy,
    /// Fused semantic + lexical candidate accepted by composite score.
    Fused,
    /// Degraded local fuzzy after a retrieval infrastructure failure.
    FallbackLocal,
    /// Generative rewrite grounded on the fused candidates.
    Generative,
    /// Generative answer produced with no retrieval context.
    GenerativeOnly,
}

impl ResolveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveMode::Rule => "rule",
            ResolveMode::Exact => "exact",
            ResolveMode::LocalFuzzy => "local-fuzzy",
            ResolveMode::Fused => "fused",
            ResolveMode::FallbackLocal => "fallback-local",
            ResolveMode::Generative => "generative",
            ResolveMode::GenerativeOnly => "generative-only",
        }
    }
}

impl std::fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal success payload returned to the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// The catalog question that matched (or the raw user question for
    /// context-free generative answers).
    pub question: String,
    pub answer: String,
    pub score: f64,
    pub mode: ResolveMode,
    /// Non-fatal diagnostics, e.g. a generative backend that was skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
