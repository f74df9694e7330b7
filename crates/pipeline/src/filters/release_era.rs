//! Filter on release-year bucket ("New" / "Old").
//!
//! Skipped when the query has no year bucket. When it has one, movies
//! without a parsed year drop out whichever bucket was picked.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::Catalog;
use sources::{Candidate, FilterQuery};
use std::sync::Arc;

/// Keeps candidates released inside the query's year bucket.
pub struct ReleaseEraFilter {
    catalog: Arc<Catalog>,
}

impl ReleaseEraFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for ReleaseEraFilter {
    fn name(&self) -> &str {
        "ReleaseEraFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, query: &FilterQuery) -> Result<Vec<Candidate>> {
        let Some(bucket) = query.year_bucket else {
            return Ok(candidates);
        };

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                self.catalog
                    .get_movie(candidate.movie_id)
                    .and_then(|movie| movie.released_year)
                    .is_some_and(|year| bucket.contains(year))
            })
            .collect();

        Ok(filtered)
    }
}
