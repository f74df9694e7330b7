//! Core domain types for the movie catalog.
//!
//! A catalog is an ordered list of [`MovieRecord`]s plus the sorted genre
//! list derived from it. It is built once and only read afterwards.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier for a movie: its row position in the catalog
pub type MovieId = usize;

/// Placeholder shown for fields the catalog does not know
pub const UNKNOWN: &str = "N/A";

// =============================================================================
// Movie-related Types
// =============================================================================

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    /// Display title, not guaranteed unique
    pub title: String,
    /// Raw comma-separated genre text, e.g. "Crime, Drama"
    pub genre: Option<String>,
    pub overview: Option<String>,
    /// Sole ranking key
    pub rating: f32,
    /// `None` when the source value was missing or not a number.
    /// Kept as parsed so "1994.0" classifies like "1994".
    pub released_year: Option<f64>,
    /// Raw runtime text as shown to users, e.g. "142 min"
    pub runtime: Option<String>,
    /// Minutes parsed from `runtime`, fractional values kept
    pub runtime_minutes: Option<f64>,
    pub poster_url: Option<String>,
}

impl MovieRecord {
    /// Discrete genre tokens: split on commas, trimmed, blanks dropped.
    pub fn genre_tokens(&self) -> impl Iterator<Item = &str> {
        self.genre
            .as_deref()
            .into_iter()
            .flat_map(|g| g.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn year_display(&self) -> String {
        self.released_year
            .map(|year| year.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn runtime_display(&self) -> String {
        self.runtime.clone().unwrap_or_else(|| UNKNOWN.to_string())
    }
}

// =============================================================================
// Catalog - The In-Memory Table
// =============================================================================

/// Holds every movie in load order together with the genre index.
///
/// Wrap it in an `Arc` once loaded: all readers borrow from the same copy
/// and nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<MovieRecord>,
    /// Distinct genre tokens, sorted
    pub(crate) genres: Vec<String>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by its row position
    pub fn get_movie(&self, id: MovieId) -> Option<&MovieRecord> {
        self.movies.get(id)
    }

    /// All movies in catalog order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Distinct genre tokens across the catalog, lexicographically sorted.
    ///
    /// Empty until [`Catalog::build_genre_index`] has run.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Append a movie, assigning it the next row position.
    ///
    /// Any `id` already on the record is overwritten so ids always match
    /// positions. Returns the assigned id.
    pub fn insert_movie(&mut self, mut movie: MovieRecord) -> MovieId {
        let id = self.movies.len();
        movie.id = id;
        self.movies.push(movie);
        id
    }
}
