//! Filtering and ranking of movie candidates.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Ranker for top-N selection by rating
//!
//! ## Architecture
//! The recommend path processes candidates in stages:
//! 1. CatalogSource yields every movie in catalog order
//! 2. Filters drop movies outside the selected genres / buckets
//! 3. Ranker sorts by rating (stable) and truncates
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_catalog, Ranker};
//! use sources::{FilterQuery, YearBucket};
//!
//! let query = FilterQuery::new(vec!["Drama".into()]).with_year_bucket(Some(YearBucket::Old));
//! let filtered = filter_catalog(catalog.clone(), &query)?;
//! let top = Ranker::new().rank(filtered, 5);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranker;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use ranker::Ranker;

use anyhow::Result;
use data_loader::Catalog;
use sources::{Candidate, CatalogSource, FilterQuery};
use std::sync::Arc;

/// Run the standard pipeline over the whole catalog.
///
/// The query must carry at least one genre; callers validate that first.
/// Survivors keep catalog order. An empty Vec means nothing matched.
pub fn filter_catalog(catalog: Arc<Catalog>, query: &FilterQuery) -> Result<Vec<Candidate>> {
    let candidates = CatalogSource::new(catalog.clone()).get_candidates();
    FilterPipeline::standard(catalog).apply(candidates, query)
}
