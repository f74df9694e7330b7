//! Catalog Source - every movie, in catalog order
//!
//! The recommend path starts from the whole catalog and lets the filter
//! pipeline narrow it down. Catalog order matters: the ranker breaks
//! rating ties by it.

use crate::types::{Candidate, CandidateSource};
use data_loader::Catalog;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Produces one candidate per catalog row
#[derive(Clone)]
pub struct CatalogSource {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<Catalog>,
}

impl CatalogSource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[instrument(skip(self))]
    pub fn get_candidates(&self) -> Vec<Candidate> {
        let candidates: Vec<Candidate> = self
            .catalog
            .movies()
            .iter()
            .map(|movie| Candidate::from_movie(movie, CandidateSource::Catalog))
            .collect();
        debug!("Catalog source produced {} candidates", candidates.len());
        candidates
    }
}
