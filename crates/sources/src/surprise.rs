//! Surprise Source - uniform random picks from the whole catalog
//!
//! Skips filtering and ranking entirely. Draws are without replacement, so
//! one call never returns the same movie twice.

use crate::types::{Candidate, CandidateSource};
use data_loader::Catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Random sampler over the catalog
#[derive(Clone)]
pub struct SurpriseSource {
    catalog: Arc<Catalog>,

    /// Fixed seed for reproducible draws; `None` uses the thread RNG
    seed: Option<u64>,
}

impl SurpriseSource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            seed: None,
        }
    }

    /// Make every draw deterministic for the given seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw `min(count, catalog size)` distinct movies.
    #[instrument(skip(self))]
    pub fn get_candidates(&self, count: usize) -> Vec<Candidate> {
        let candidates = match self.seed {
            Some(seed) => self.sample_with(&mut StdRng::seed_from_u64(seed), count),
            None => self.sample_with(&mut rand::rng(), count),
        };
        debug!(
            "Surprise source drew {} of {} movies",
            candidates.len(),
            self.catalog.len()
        );
        candidates
    }

    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Candidate> {
        let movies = self.catalog.movies();
        let amount = count.min(movies.len());

        rand::seq::index::sample(rng, movies.len(), amount)
            .into_iter()
            .map(|idx| Candidate::from_movie(&movies[idx], CandidateSource::Surprise))
            .collect()
    }
}
