//! Recommender crate for the ReelPicks movie picker.
//!
//! This crate contains the orchestrator that ties the catalog, the
//! candidate sources, the filter pipeline and the ranker together, plus
//! the configuration shared with the CLI.

pub mod config;
pub mod orchestrator;

pub use config::RecommenderConfig;
pub use orchestrator::{MovieCard, RecommendOutcome, RecommendRequest, Recommender};
