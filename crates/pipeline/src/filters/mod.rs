//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre_match;
pub mod release_era;
pub mod runtime;

// Re-export for convenience
pub use genre_match::GenreMatchFilter;
pub use release_era::ReleaseEraFilter;
pub use runtime::RuntimeFilter;
