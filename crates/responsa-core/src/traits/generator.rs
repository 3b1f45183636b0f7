use crate::errors::GenerativeError;

/// Synchronous text generation backend.
///
/// One attempt per call, bounded by the provider's own timeout; the
/// core never retries it.
pub trait IGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, GenerativeError>;

    fn name(&self) -> &str;
}
