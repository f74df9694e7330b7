//! # Data Loader Crate
//!
//! This crate loads the movie catalog CSV into an in-memory [`Catalog`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Catalog)
//! - **parser**: Read CSV rows and convert them to MovieRecords
//! - **index**: Build the catalog and its genre index
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("imdb_top_1000.csv"))?;
//!
//! println!("{} movies, genres: {:?}", catalog.len(), catalog.genres());
//! let first = catalog.get_movie(0).unwrap();
//! println!("{} ({})", first.title, first.year_display());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::MAX_RATING;
pub use types::{Catalog, MovieId, MovieRecord, UNKNOWN};
