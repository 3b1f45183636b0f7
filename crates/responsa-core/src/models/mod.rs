//! Request, response, and intermediate pipeline records.

mod candidate;
mod resolution;

pub use candidate::{Candidate, SemanticHit};
pub use resolution::{ResolveMode, ResolveRequest, Resolution};
