//! Filter on runtime bucket ("Short" / "Normal" / "Long").

use crate::traits::Filter;
use anyhow::Result;
use data_loader::Catalog;
use sources::{Candidate, FilterQuery};
use std::sync::Arc;

/// Keeps candidates whose runtime falls in the query's duration bucket.
///
/// No bucket means no filtering. Movies whose runtime didn't parse
/// (e.g. "abc min") are dropped whenever a bucket is set.
pub struct RuntimeFilter {
    catalog: Arc<Catalog>,
}

impl RuntimeFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for RuntimeFilter {
    fn name(&self) -> &str {
        "RuntimeFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, query: &FilterQuery) -> Result<Vec<Candidate>> {
        let Some(bucket) = query.duration_bucket else {
            return Ok(candidates);
        };

        Ok(candidates
            .into_iter()
            .filter(|candidate| {
                self.catalog
                    .get_movie(candidate.movie_id)
                    .and_then(|movie| movie.runtime_minutes)
                    .is_some_and(|minutes| bucket.contains(minutes))
            })
            .collect())
    }
}
