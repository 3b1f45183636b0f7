//! Error taxonomy for the resolution pipeline.
//!
//! Retrieval and generative failures are typed separately because their
//! propagation rules differ: a retrieval failure is absorbed once by the
//! degraded local fallback, while a generative failure is always
//! absorbed. No error here is fatal to the process.

mod generative_error;
mod retrieval_error;

pub use generative_error::GenerativeError;
pub use retrieval_error::RetrievalError;

/// Result alias used across the workspace.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Terminal failure modes of a resolution request.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Caller error: category or question absent.
    #[error("missing input: {field} is required")]
    MissingInput { field: &'static str },

    #[error("category not found: {name}")]
    CategoryNotFound { name: String },

    /// Every stage exhausted below the acceptance threshold.
    #[error("no candidate reached the acceptance threshold")]
    NoConfidentMatch,

    /// Retrieval infrastructure failed and the degraded fallback missed.
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Generative(#[from] GenerativeError),
}
