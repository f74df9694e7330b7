//! Shared types passed between sources, filters and the orchestrator.

use data_loader::{MovieId, MovieRecord};
use serde::{Deserialize, Serialize};

/// Movies released in or after this year count as "New"
pub const NEW_RELEASE_YEAR: f64 = 2000.0;

/// Runtimes below this many minutes count as "Short"
pub const SHORT_RUNTIME_BELOW: f64 = 90.0;

/// Runtimes above this many minutes count as "Long"
pub const LONG_RUNTIME_ABOVE: f64 = 120.0;

/// Where a candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateSource {
    /// Every row of the catalog, in catalog order
    Catalog,
    /// Uniform random draw
    Surprise,
}

/// A movie under consideration, with the rating copied in for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub movie_id: MovieId,
    pub source: CandidateSource,
    pub rating: f32,
}

impl Candidate {
    pub fn new(movie_id: MovieId, source: CandidateSource, rating: f32) -> Self {
        Self {
            movie_id,
            source,
            rating,
        }
    }

    pub fn from_movie(movie: &MovieRecord, source: CandidateSource) -> Self {
        Self::new(movie.id, source, movie.rating)
    }
}

/// Release-year bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearBucket {
    /// year >= 2000
    New,
    /// year < 2000
    Old,
}

impl YearBucket {
    pub fn contains(self, year: f64) -> bool {
        match self {
            YearBucket::New => year >= NEW_RELEASE_YEAR,
            YearBucket::Old => year < NEW_RELEASE_YEAR,
        }
    }
}

/// Runtime bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationBucket {
    /// under 90 minutes
    Short,
    /// 90 to 120 minutes inclusive
    Normal,
    /// over 120 minutes
    Long,
}

impl DurationBucket {
    pub fn contains(self, minutes: f64) -> bool {
        match self {
            DurationBucket::Short => minutes < SHORT_RUNTIME_BELOW,
            DurationBucket::Normal => {
                (SHORT_RUNTIME_BELOW..=LONG_RUNTIME_ABOVE).contains(&minutes)
            }
            DurationBucket::Long => minutes > LONG_RUNTIME_ABOVE,
        }
    }
}

/// Everything the filters need to know about one recommend request.
///
/// `None` buckets mean "All": that filter is skipped entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub genres: Vec<String>,
    pub year_bucket: Option<YearBucket>,
    pub duration_bucket: Option<DurationBucket>,
}

impl FilterQuery {
    pub fn new(genres: Vec<String>) -> Self {
        Self {
            genres,
            ..Default::default()
        }
    }

    pub fn with_year_bucket(mut self, bucket: Option<YearBucket>) -> Self {
        self.year_bucket = bucket;
        self
    }

    pub fn with_duration_bucket(mut self, bucket: Option<DurationBucket>) -> Self {
        self.duration_bucket = bucket;
        self
    }
}
