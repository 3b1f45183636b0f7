/// Retrieval infrastructure errors.
///
/// Distinguished from an empty result set, which is a valid "no match".
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("embedding request failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("vector index search failed: {reason}")]
    IndexSearchFailed { reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("malformed provider response: {reason}")]
    MalformedResponse { reason: String },
}
