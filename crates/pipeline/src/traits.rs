//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use anyhow::Result;
use sources::{Candidate, FilterQuery};

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// Filters take ownership of the Vec<Candidate> and return the survivors
/// in their original relative order. The ranker relies on that order to
/// break rating ties.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `query` - Genre and bucket selections for this request
    fn apply(&self, candidates: Vec<Candidate>, query: &FilterQuery) -> Result<Vec<Candidate>>;
}
