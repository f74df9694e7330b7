//! Top-N ranking by rating.

use sources::Candidate;
use std::cmp::Ordering;

/// Sorts candidates by rating and keeps the best `top_n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Highest rating first, truncated to `top_n`.
    ///
    /// `sort_by` is stable, so equal ratings keep their incoming order.
    pub fn rank(&self, mut candidates: Vec<Candidate>, top_n: usize) -> Vec<Candidate> {
        candidates.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        candidates.truncate(top_n);
        candidates
    }
}
