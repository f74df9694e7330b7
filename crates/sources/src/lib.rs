//! # Sources Crate
//!
//! Candidate sources for the movie picker, plus the query types the
//! filter pipeline consumes.
//!
//! ## Components
//!
//! ### Catalog Source
//! Every catalog row as a candidate, in catalog order. Feeds the
//! recommend path (filter, then rank by rating).
//!
//! ### Surprise Source
//! Uniform random sample without replacement from the whole catalog.
//! Feeds the "surprise me" path; no filtering or ranking.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CatalogSource, SurpriseSource, query::build_filter_query, YearBucket};
//! use data_loader::Catalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_file("imdb_top_1000.csv".as_ref())?);
//!
//! let everything = CatalogSource::new(catalog.clone()).get_candidates();
//! let picks = SurpriseSource::new(catalog.clone()).get_candidates(5);
//!
//! let query = build_filter_query(&["Drama"], Some(YearBucket::Old), None);
//! ```

// Public modules
pub mod types;
pub mod query;
pub mod catalog_source;
pub mod surprise;

// Re-export commonly used types
pub use types::{
    Candidate, CandidateSource, DurationBucket, FilterQuery, YearBucket, LONG_RUNTIME_ABOVE,
    NEW_RELEASE_YEAR, SHORT_RUNTIME_BELOW,
};
pub use catalog_source::CatalogSource;
pub use surprise::SurpriseSource;
