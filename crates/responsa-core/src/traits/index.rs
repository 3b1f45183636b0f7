use crate::errors::RetrievalError;
use crate::models::SemanticHit;

/// Vector similarity index over the indexed catalog.
pub trait IVectorIndex: Send + Sync {
    /// Nearest neighbors for `vector`, filtered server-side to
    /// `category` (so other categories can never leak in), ordered
    /// descending by score.
    fn search(
        &self,
        vector: &[f32],
        category: &str,
        top_k: usize,
    ) -> Result<Vec<SemanticHit>, RetrievalError>;

    fn name(&self) -> &str;
}
