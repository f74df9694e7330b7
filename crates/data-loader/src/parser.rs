//! Parser for the movie catalog CSV.
//!
//! Expected header (extra columns are ignored):
//! `Series_Title, IMDB_Rating, Genre, Overview, Released_Year, Runtime, Poster_Link`
//!
//! Rows are first read as raw strings ([`RawMovieRow`]) and then converted
//! to [`MovieRecord`]s. Title and rating are mandatory; year and runtime
//! fall back to `None` when they don't parse.

use crate::error::{DataLoadError, Result};
use crate::types::MovieRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Columns the catalog cannot be built without
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Series_Title",
    "IMDB_Rating",
    "Genre",
    "Overview",
    "Released_Year",
    "Runtime",
    "Poster_Link",
];

/// One CSV row, untouched apart from the csv crate's empty-field handling.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMovieRow {
    #[serde(rename = "Series_Title")]
    pub title: Option<String>,
    #[serde(rename = "IMDB_Rating")]
    pub rating: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Overview")]
    pub overview: Option<String>,
    #[serde(rename = "Released_Year")]
    pub released_year: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Poster_Link")]
    pub poster_link: Option<String>,
}

/// Read every data row of the catalog file.
///
/// Returns `(line, row)` pairs where `line` is the 1-based file line the
/// row starts on, so later conversion errors can point at it.
pub fn read_rows(path: &Path) -> Result<Vec<(usize, RawMovieRow)>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);
        let row: RawMovieRow = record.deserialize(Some(&headers))?;
        rows.push((line, row));
    }
    Ok(rows)
}

/// Convert a raw row into a [`MovieRecord`].
///
/// The returned record has `id == 0`; the catalog assigns the real row
/// position on insert.
pub fn parse_row(file: &str, line: usize, row: RawMovieRow) -> Result<MovieRecord> {
    let title = clean_text(row.title).ok_or_else(|| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: "Missing title".to_string(),
    })?;

    let rating_str = clean_text(row.rating).ok_or_else(|| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: "Missing rating".to_string(),
    })?;
    let rating: f32 = rating_str.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid rating: {}", e),
    })?;
    if !rating.is_finite() {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Invalid rating: {} is not a number", rating_str),
        });
    }

    let runtime = clean_text(row.runtime);
    let runtime_minutes = runtime.as_deref().and_then(parse_runtime_minutes);

    Ok(MovieRecord {
        id: 0,
        title,
        genre: clean_text(row.genre),
        overview: clean_text(row.overview),
        rating,
        released_year: row.released_year.as_deref().and_then(parse_year),
        runtime,
        runtime_minutes,
        poster_url: clean_text(row.poster_link),
    })
}

/// Parse a release year.
///
/// Example: "1994"   -> Some(1994.0)
///          "1994.0" -> Some(1994.0)
///          "PG"     -> None
pub fn parse_year(s: &str) -> Option<f64> {
    parse_number(s)
}

/// Parse the minutes out of a runtime string.
///
/// Example: "142 min"   -> Some(142.0)
///          "142.0 min" -> Some(142.0)
///          "95"        -> Some(95.0)
///          "abc min"   -> None
pub fn parse_runtime_minutes(s: &str) -> Option<f64> {
    let s = s.trim();
    parse_number(s.strip_suffix("min").unwrap_or(s))
}

/// Any finite decimal number; NaN and infinities count as missing.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Trim a text field; blank means absent.
fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, rating: &str) -> RawMovieRow {
        RawMovieRow {
            title: Some(title.to_string()),
            rating: Some(rating.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1994"), Some(1994.0));
        assert_eq!(parse_year(" 2010 "), Some(2010.0));
        assert_eq!(parse_year("1994.0"), Some(1994.0));
        assert_eq!(parse_year("PG"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("NaN"), None);
        assert_eq!(parse_year("inf"), None);
    }

    #[test]
    fn test_parse_runtime_minutes() {
        assert_eq!(parse_runtime_minutes("142 min"), Some(142.0));
        assert_eq!(parse_runtime_minutes("142.0 min"), Some(142.0));
        assert_eq!(parse_runtime_minutes("120.5 min"), Some(120.5));
        assert_eq!(parse_runtime_minutes("95"), Some(95.0));
        assert_eq!(parse_runtime_minutes("abc min"), None);
        assert_eq!(parse_runtime_minutes("min"), None);
        assert_eq!(parse_runtime_minutes("inf min"), None);
    }

    #[test]
    fn test_parse_row_full() {
        let raw = RawMovieRow {
            title: Some("The Shawshank Redemption".to_string()),
            rating: Some("9.3".to_string()),
            genre: Some("Drama".to_string()),
            overview: Some("Two imprisoned men bond.".to_string()),
            released_year: Some("1994".to_string()),
            runtime: Some("142 min".to_string()),
            poster_link: Some("https://example.com/p.jpg".to_string()),
        };

        let movie = parse_row("movies.csv", 2, raw).unwrap();
        assert_eq!(movie.title, "The Shawshank Redemption");
        assert_eq!(movie.rating, 9.3);
        assert_eq!(movie.released_year, Some(1994.0));
        assert_eq!(movie.runtime.as_deref(), Some("142 min"));
        assert_eq!(movie.runtime_minutes, Some(142.0));
        assert_eq!(movie.poster_url.as_deref(), Some("https://example.com/p.jpg"));
    }

    #[test]
    fn test_parse_row_optional_fields_absent() {
        let mut raw = row("Apollo 13", "7.6");
        raw.released_year = Some("PG".to_string());
        raw.runtime = Some("abc min".to_string());
        raw.poster_link = Some("   ".to_string());

        let movie = parse_row("movies.csv", 5, raw).unwrap();
        assert_eq!(movie.released_year, None);
        assert_eq!(movie.runtime.as_deref(), Some("abc min"));
        assert_eq!(movie.runtime_minutes, None);
        assert_eq!(movie.poster_url, None);
        assert_eq!(movie.genre, None);
    }

    #[test]
    fn test_parse_row_missing_title() {
        let raw = row("  ", "8.0");
        let err = parse_row("movies.csv", 3, raw).unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 3, .. }));
    }

    #[test]
    fn test_parse_row_non_finite_rating() {
        for value in ["NaN", "inf"] {
            let err = parse_row("movies.csv", 6, row("Heat", value)).unwrap_err();
            assert!(matches!(err, DataLoadError::ParseError { line: 6, .. }));
        }
    }

    #[test]
    fn test_parse_row_bad_rating() {
        let raw = row("Heat", "great");
        let err = parse_row("movies.csv", 4, raw).unwrap_err();
        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 4);
                assert!(reason.starts_with("Invalid rating"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
