use crate::errors::RetrievalError;

/// Embedding generation provider.
///
/// The core only ever embeds single texts and never interprets vector
/// internals.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a fixed-length vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
