//! # Recommendation Orchestrator
//!
//! This module coordinates the two user actions:
//!
//! **Recommend**
//! 1. Normalize the selected genres (none left -> `NoGenreSelected`)
//! 2. Take every catalog movie as a candidate
//! 3. Apply the genre / year / runtime filters
//! 4. Rank by rating and keep the top N (nothing left -> `NoMatches`)
//! 5. Turn the winners into display cards
//!
//! **Surprise**
//! 1. Draw N distinct movies uniformly from the whole catalog
//! 2. Turn them into display cards

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::info;

use data_loader::{Catalog, MovieId, MovieRecord, UNKNOWN};
use pipeline::{FilterPipeline, Ranker};
use sources::query::build_filter_query;
use sources::{
    Candidate, CandidateSource, CatalogSource, DurationBucket, FilterQuery, SurpriseSource,
    YearBucket,
};

use crate::config::RecommenderConfig;

/// One movie as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCard {
    /// 1-based position in the result list
    pub rank: usize,
    pub movie_id: MovieId,
    pub title: String,
    pub rating: f32,
    /// Raw genre text, or "N/A"
    pub genre: String,
    /// Release year, or "N/A"
    pub year: String,
    /// Runtime text such as "142 min", or "N/A"
    pub runtime: String,
    pub overview: String,
    /// Omitted from output when the catalog has no poster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub source: CandidateSource,
}

impl MovieCard {
    pub fn from_movie(rank: usize, movie: &MovieRecord, source: CandidateSource) -> Self {
        Self {
            rank,
            movie_id: movie.id,
            title: movie.title.clone(),
            rating: movie.rating,
            genre: movie.genre.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            year: movie.year_display(),
            runtime: movie.runtime_display(),
            overview: movie.overview.clone().unwrap_or_default(),
            poster_url: movie.poster_url.clone(),
            source,
        }
    }
}

/// A "recommend" action as the user submitted it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub genres: Vec<String>,
    pub year_bucket: Option<YearBucket>,
    pub duration_bucket: Option<DurationBucket>,
    /// Overrides the configured `top_n`
    pub top_n: Option<NonZeroUsize>,
}

impl RecommendRequest {
    pub fn new<S: Into<String>>(genres: impl IntoIterator<Item = S>) -> Self {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
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

    pub fn with_top_n(mut self, top_n: NonZeroUsize) -> Self {
        self.top_n = Some(top_n);
        self
    }
}

/// Result of a "recommend" action.
///
/// The two empty outcomes are kept apart: one means the user has to pick a
/// genre, the other that the filters matched nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "movies", rename_all = "snake_case")]
pub enum RecommendOutcome {
    Recommendations(Vec<MovieCard>),
    NoMatches,
    NoGenreSelected,
}

impl RecommendOutcome {
    /// Message to show instead of results, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            RecommendOutcome::Recommendations(_) => None,
            RecommendOutcome::NoMatches => Some("No movies found for the selected filters."),
            RecommendOutcome::NoGenreSelected => Some("Please select at least one genre."),
        }
    }
}

/// Main orchestrator that coordinates the recommend and surprise paths.
///
/// Cheap to clone: everything heavy sits behind an `Arc`.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    catalog_source: CatalogSource,
    surprise: SurpriseSource,
    filter_pipeline: Arc<FilterPipeline>,
    ranker: Ranker,
    config: RecommenderConfig,
}

impl Recommender {
    /// Create a new orchestrator with all components initialized
    pub fn new(catalog: Arc<Catalog>, config: RecommenderConfig) -> Self {
        Self {
            catalog_source: CatalogSource::new(catalog.clone()),
            surprise: SurpriseSource::new(catalog.clone()),
            filter_pipeline: Arc::new(FilterPipeline::standard(catalog.clone())),
            ranker: Ranker::new(),
            catalog,
            config,
        }
    }

    /// Make surprise draws reproducible
    pub fn with_surprise_seed(mut self, seed: u64) -> Self {
        self.surprise = self.surprise.with_seed(seed);
        self
    }

    /// Distinct genres for the selection list, sorted
    pub fn genres(&self) -> &[String] {
        self.catalog.genres()
    }

    /// Main entry point: top-rated movies matching the request
    pub fn recommend(&self, request: &RecommendRequest) -> Result<RecommendOutcome> {
        let start_time = Instant::now();

        let Some(query) = build_filter_query(
            &request.genres,
            request.year_bucket,
            request.duration_bucket,
        ) else {
            info!("Recommend request without genres, nothing to filter");
            return Ok(RecommendOutcome::NoGenreSelected);
        };

        let candidates = self.catalog_source.get_candidates();
        let filtered = self.apply_filters(candidates, &query)?;
        if filtered.is_empty() {
            info!(
                "No movies matched genres {:?} (year: {:?}, duration: {:?})",
                query.genres, query.year_bucket, query.duration_bucket
            );
            return Ok(RecommendOutcome::NoMatches);
        }

        let top_n = request.top_n.unwrap_or(self.config.top_n);
        let cards = self.rank_and_select(filtered, top_n.get())?;

        info!(
            "Selected {} recommendations in {:.2?}",
            cards.len(),
            start_time.elapsed()
        );
        Ok(RecommendOutcome::Recommendations(cards))
    }

    /// Random picks from the whole catalog, ignoring every filter
    pub fn surprise(&self, count: Option<NonZeroUsize>) -> Result<Vec<MovieCard>> {
        let count = count.unwrap_or(self.config.surprise_count);
        let candidates = self.surprise.get_candidates(count.get());
        info!("Drew {} surprise picks", candidates.len());
        self.to_cards(candidates)
    }

    /// Apply the filter pipeline to candidates
    fn apply_filters(&self, candidates: Vec<Candidate>, query: &FilterQuery) -> Result<Vec<Candidate>> {
        info!("Applying filters to {} candidates", candidates.len());
        let filtered = self
            .filter_pipeline
            .apply(candidates, query)
            .context("Failed to apply filters")?;
        info!("Filtering complete, {} candidates remain", filtered.len());
        Ok(filtered)
    }

    /// Rank candidates by rating and select top N
    fn rank_and_select(&self, candidates: Vec<Candidate>, top_n: usize) -> Result<Vec<MovieCard>> {
        let ranked = self.ranker.rank(candidates, top_n);
        self.to_cards(ranked)
    }

    fn to_cards(&self, candidates: Vec<Candidate>) -> Result<Vec<MovieCard>> {
        candidates
            .into_iter()
            .enumerate()
            .map(|(idx, candidate)| {
                let movie = self
                    .catalog
                    .get_movie(candidate.movie_id)
                    .ok_or_else(|| anyhow!("Movie {} not in catalog", candidate.movie_id))?;
                Ok(MovieCard::from_movie(idx + 1, movie, candidate.source))
            })
            .collect()
    }
}
