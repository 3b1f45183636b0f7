use crate::errors::ResolveResult;
use crate::models::{ResolveRequest, Resolution};

/// The resolution pipeline as seen by the transport layer.
pub trait IResolver: Send + Sync {
    fn resolve(&self, request: &ResolveRequest) -> ResolveResult<Resolution>;
}
