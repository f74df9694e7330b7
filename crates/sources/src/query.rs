//! Helper to build a FilterQuery from raw user selections.

use crate::types::{DurationBucket, FilterQuery, YearBucket};
use std::collections::HashSet;

/// Build a FilterQuery from the genres the user picked.
///
/// Genres are trimmed, blanks are dropped and duplicates removed (first
/// occurrence wins). Returns `None` when no genre is left: the filter
/// engine must not run without at least one genre.
pub fn build_filter_query<S: AsRef<str>>(
    genres: &[S],
    year_bucket: Option<YearBucket>,
    duration_bucket: Option<DurationBucket>,
) -> Option<FilterQuery> {
    let mut seen = HashSet::new();
    let genres: Vec<String> = genres
        .iter()
        .map(|g| g.as_ref().trim())
        .filter(|g| !g.is_empty())
        .filter(|g| seen.insert(*g))
        .map(str::to_string)
        .collect();

    if genres.is_empty() {
        return None;
    }

    Some(
        FilterQuery::new(genres)
            .with_year_bucket(year_bucket)
            .with_duration_bucket(duration_bucket),
    )
}
