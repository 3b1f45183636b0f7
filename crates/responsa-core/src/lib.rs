//! # responsa-core
//!
//! Foundation crate for the Responsa FAQ resolution engine.
//! Defines catalog types, collaborator traits, errors, config, and the
//! two-level text normalizer. Every other crate in the workspace depends
//! on this.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Category, FaqEntry, InMemoryCatalog};
pub use config::ResolverConfig;
pub use errors::{GenerativeError, ResolveError, ResolveResult, RetrievalError};
pub use models::{Candidate, ResolveMode, ResolveRequest, Resolution, SemanticHit};
pub use normalize::NormalizedQuery;
