//! Error types for the data-loader crate.
//!
//! Only structural problems with the catalog file are errors. A year or
//! runtime that does not parse is stored as `None` on the record instead.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the file (bad quoting, ragged rows, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the catalog needs is not present in the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// Row in the catalog couldn't be turned into a movie record
    ///
    /// `line` is the 1-based line in the file; the header is line 1.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
