//! Filter to keep only movies matching at least one selected genre.
//!
//! Matching is a substring test against the raw genre text, not a token
//! comparison: "Drama" matches "Crime, Drama" and "Sci" matches "Sci-Fi".

use crate::traits::Filter;
use anyhow::Result;
use data_loader::Catalog;
use sources::{Candidate, FilterQuery};
use std::sync::Arc;

/// Keeps candidates whose genre text contains any of the query's genres.
///
/// ## Algorithm
/// 1. Trim each selected genre
/// 2. Look up the movie's raw genre string
/// 3. Keep the movie if any selected genre is a substring of it
///
/// Movies without a genre string never match.
pub struct GenreMatchFilter {
    catalog: Arc<Catalog>,
}

impl GenreMatchFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for GenreMatchFilter {
    fn name(&self) -> &str {
        "GenreMatchFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, query: &FilterQuery) -> Result<Vec<Candidate>> {
        let selected: Vec<&str> = query.genres.iter().map(|g| g.trim()).collect();

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                match self
                    .catalog
                    .get_movie(candidate.movie_id)
                    .and_then(|movie| movie.genre.as_deref())
                {
                    Some(genre) => selected.iter().any(|g| genre.contains(g)),
                    None => false, // Exclude if movie or genre not found
                }
            })
            .collect();
        Ok(filtered)
    }
}
