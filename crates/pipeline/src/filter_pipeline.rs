//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{GenreMatchFilter, ReleaseEraFilter, RuntimeFilter};
use crate::traits::Filter;
use anyhow::Result;
use data_loader::Catalog;
use sources::{Candidate, FilterQuery};
use std::sync::Arc;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreMatchFilter::new(catalog.clone()))
///     .add_filter(ReleaseEraFilter::new(catalog.clone()))
///     .add_filter(RuntimeFilter::new(catalog.clone()));
///
/// let filtered = pipeline.apply(candidates, &query)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Genre, then release era, then runtime.
    pub fn standard(catalog: Arc<Catalog>) -> Self {
        Self::new()
            .add_filter(GenreMatchFilter::new(catalog.clone()))
            .add_filter(ReleaseEraFilter::new(catalog.clone()))
            .add_filter(RuntimeFilter::new(catalog))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Stops early once nothing is left; an empty result is a valid
    /// outcome, not an error.
    pub fn apply(&self, candidates: Vec<Candidate>, query: &FilterQuery) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
