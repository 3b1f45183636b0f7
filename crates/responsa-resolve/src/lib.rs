//! # responsa-resolve
//!
//! The resolution pipeline: a cascade of matching strategies of
//! increasing cost and decreasing precision.
//!
//! Stage order: rule override → exact → local fuzzy → semantic
//! retrieval → candidate fusion + composite scoring → optional
//! generative rewrite, degrading gracefully at every external seam.

pub mod augment;
pub mod engine;
pub mod fusion;
pub mod heuristics;
pub mod matcher;
pub mod retriever;
pub mod similarity;

pub use engine::ResolutionEngine;
pub use fusion::scorer::ScorerWeights;
pub use heuristics::Heuristics;
