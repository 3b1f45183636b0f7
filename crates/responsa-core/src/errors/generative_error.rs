/// Generative backend errors. Non-fatal by policy: the orchestrator
/// always degrades to the retrieved answer.
#[derive(Debug, thiserror::Error)]
pub enum GenerativeError {
    #[error("model not found: {model}")]
    ModelNotFound { model: String },

    #[error("generative backend unreachable: {reason}")]
    Unreachable { reason: String },

    #[error("generation timed out after {timeout_ms}ms")]
    TimedOut { timeout_ms: u64 },

    #[error("backend returned an empty completion")]
    EmptyCompletion,
}
