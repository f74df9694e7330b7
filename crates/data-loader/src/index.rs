//! Catalog building and indexing logic.
//!
//! Loading reads the CSV, converts rows in parallel with Rayon (order is
//! preserved), builds the genre index and flags odd ratings.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{info, warn};

/// Highest rating the catalog accepts (IMDb scale)
pub const MAX_RATING: f32 = 10.0;

impl Catalog {
    /// Load the catalog from a CSV file.
    ///
    /// Steps:
    /// 1. Read raw rows and check the header
    /// 2. Convert rows to MovieRecords in parallel
    /// 3. Insert in file order
    /// 4. Build the genre index
    /// 5. Flag ratings outside the IMDb scale
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let rows = parser::read_rows(path)?;

        // Indexed parallel iterators keep input order on collect
        let movies = rows
            .into_par_iter()
            .map(|(line, row)| parser::parse_row(&file_name, line, row))
            .collect::<Result<Vec<MovieRecord>>>()?;

        let mut catalog = Catalog::new();
        for movie in movies {
            catalog.insert_movie(movie);
        }

        catalog.build_genre_index();
        catalog.validate();

        info!(
            "Loaded {} movies with {} distinct genres",
            catalog.len(),
            catalog.genres.len()
        );
        Ok(catalog)
    }

    /// Build the sorted, de-duplicated genre list.
    ///
    /// Each genre string is split on commas and trimmed; movies without a
    /// genre contribute nothing.
    pub fn build_genre_index(&mut self) {
        let genres: BTreeSet<&str> = self
            .movies
            .iter()
            .flat_map(|movie| movie.genre_tokens())
            .collect();
        self.genres = genres.into_iter().map(str::to_string).collect();
    }

    /// Warn about every rating outside `0.0..=MAX_RATING`.
    ///
    /// Such rows stay in the catalog and rank by their stored value.
    /// Returns how many rows were flagged.
    pub fn validate(&self) -> usize {
        let mut flagged = 0;
        for movie in &self.movies {
            if !(0.0..=MAX_RATING).contains(&movie.rating) {
                warn!(
                    "Rating {} of \"{}\" (row {}) is outside 0-{}",
                    movie.rating, movie.title, movie.id, MAX_RATING
                );
                flagged += 1;
            }
        }
        flagged
    }
}
