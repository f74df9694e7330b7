//! Integration tests for the pipeline.
//!
//! These tests run the standard filters and the ranker together over
//! small hand-built catalogs.

use data_loader::{Catalog, MovieRecord};
use pipeline::{filter_catalog, Ranker};
use sources::{DurationBucket, FilterQuery, YearBucket};
use std::sync::Arc;

fn record(title: &str, genre: &str, rating: f32, year: Option<f64>, runtime: &str) -> MovieRecord {
    MovieRecord {
        id: 0,
        title: title.to_string(),
        genre: Some(genre.to_string()),
        overview: None,
        rating,
        released_year: year,
        runtime: Some(runtime.to_string()),
        runtime_minutes: data_loader::parser::parse_runtime_minutes(runtime),
        poster_url: None,
    }
}

fn build(movies: Vec<MovieRecord>) -> Arc<Catalog> {
    let mut catalog = Catalog::new();
    for m in movies {
        catalog.insert_movie(m);
    }
    catalog.build_genre_index();
    Arc::new(catalog)
}

/// A: Drama/Crime 1994 142 min 9.3; B: Action 2010 95 min 8.0
fn two_movie_catalog() -> Arc<Catalog> {
    build(vec![
        record("A", "Drama, Crime", 9.3, Some(1994.0), "142 min"),
        record("B", "Action", 8.0, Some(2010.0), "95 min"),
    ])
}

fn larger_catalog() -> Arc<Catalog> {
    build(vec![
        record("The Godfather", "Crime, Drama", 9.2, Some(1972.0), "175 min"),
        record("The Dark Knight", "Action, Crime, Drama", 9.0, Some(2008.0), "152 min"),
        record("Toy Story", "Animation, Adventure, Comedy", 8.3, Some(1995.0), "81 min"),
        record("Amelie", "Comedy, Romance", 8.3, Some(2001.0), "122 min"),
        record("Apollo 13", "Adventure, Drama, History", 7.6, None, "140 min"),
        record("Memento", "Mystery, Thriller", 8.4, Some(2000.0), "113 min"),
        record("Rope", "Crime, Drama, Mystery", 7.9, Some(1948.0), "abc min"),
        record("Heat", "Action, Crime, Drama", 8.3, Some(1995.0), "170 min"),
    ])
}

fn titles(catalog: &Catalog, ids: impl IntoIterator<Item = usize>) -> Vec<String> {
    ids.into_iter()
        .map(|id| catalog.get_movie(id).unwrap().title.clone())
        .collect()
}

fn query(genres: &[&str]) -> FilterQuery {
    FilterQuery::new(genres.iter().map(|g| g.to_string()).collect())
}

#[test]
fn test_drama_scenario() {
    let catalog = two_movie_catalog();

    let filtered = filter_catalog(catalog.clone(), &query(&["Drama"])).unwrap();
    assert_eq!(titles(&catalog, filtered.iter().map(|c| c.movie_id)), vec!["A"]);

    let ranked = Ranker::new().rank(filtered, 5);
    assert_eq!(titles(&catalog, ranked.iter().map(|c| c.movie_id)), vec!["A"]);
}

#[test]
fn test_drama_year_bucket_scenario() {
    let catalog = two_movie_catalog();

    let old = query(&["Drama"]).with_year_bucket(Some(YearBucket::Old));
    let filtered = filter_catalog(catalog.clone(), &old).unwrap();
    assert_eq!(titles(&catalog, filtered.iter().map(|c| c.movie_id)), vec!["A"]);

    let new = query(&["Drama"]).with_year_bucket(Some(YearBucket::New));
    assert!(filter_catalog(catalog, &new).unwrap().is_empty());
}

#[test]
fn test_unparsable_runtime_excluded_under_normal() {
    let catalog = build(vec![record("X", "Drama", 8.0, Some(2005.0), "abc min")]);

    let normal = query(&["Drama"]).with_duration_bucket(Some(DurationBucket::Normal));
    assert!(filter_catalog(catalog.clone(), &normal).unwrap().is_empty());

    // Without a duration bucket the same movie passes
    assert_eq!(filter_catalog(catalog, &query(&["Drama"])).unwrap().len(), 1);
}

#[test]
fn test_decimal_year_and_runtime_are_classified() {
    let year = data_loader::parser::parse_year("1994.0");
    let catalog = build(vec![
        record("A", "Drama", 9.3, year, "142.0 min"),
        record("B", "Drama", 8.0, Some(2001.0), "120.5 min"),
    ]);

    let old_long = query(&["Drama"])
        .with_year_bucket(Some(YearBucket::Old))
        .with_duration_bucket(Some(DurationBucket::Long));
    let filtered = filter_catalog(catalog.clone(), &old_long).unwrap();
    assert_eq!(titles(&catalog, filtered.iter().map(|c| c.movie_id)), vec!["A"]);

    // 120.5 is past the Normal upper bound
    let long = query(&["Drama"]).with_duration_bucket(Some(DurationBucket::Long));
    let filtered = filter_catalog(catalog.clone(), &long).unwrap();
    assert_eq!(titles(&catalog, filtered.iter().map(|c| c.movie_id)), vec!["A", "B"]);
}

#[test]
fn test_every_result_matches_a_selected_genre() {
    let catalog = larger_catalog();
    let selected = ["Crime", "Comedy"];

    let filtered = filter_catalog(catalog.clone(), &query(&selected)).unwrap();
    assert!(!filtered.is_empty());
    for candidate in &filtered {
        let genre = catalog.get_movie(candidate.movie_id).unwrap().genre.clone().unwrap();
        assert!(selected.iter().any(|g| genre.contains(g)), "{} did not match", genre);
    }
}

#[test]
fn test_year_buckets_partition_dated_movies() {
    let catalog = larger_catalog();
    let all = query(&["a", "e", "o", "y"]); // substrings that hit every genre string

    let everything = filter_catalog(catalog.clone(), &all).unwrap();
    let new_query = all.clone().with_year_bucket(Some(YearBucket::New));
    let old_query = all.clone().with_year_bucket(Some(YearBucket::Old));
    let new = filter_catalog(catalog.clone(), &new_query).unwrap();
    let old = filter_catalog(catalog.clone(), &old_query).unwrap();

    let dated = everything
        .iter()
        .filter(|c| catalog.get_movie(c.movie_id).unwrap().released_year.is_some())
        .count();

    assert_eq!(new.len() + old.len(), dated);
    assert!(new.iter().all(|c| old.iter().all(|o| o.movie_id != c.movie_id)));
    assert!(new
        .iter()
        .all(|c| catalog.get_movie(c.movie_id).unwrap().released_year.unwrap() >= 2000.0));
    assert!(old
        .iter()
        .all(|c| catalog.get_movie(c.movie_id).unwrap().released_year.unwrap() < 2000.0));
}

#[test]
fn test_full_recommend_flow() {
    let catalog = larger_catalog();

    let q = query(&["Drama"]).with_duration_bucket(Some(DurationBucket::Long));
    let filtered = filter_catalog(catalog.clone(), &q).unwrap();
    let ranked = Ranker::new().rank(filtered, 3);

    // Rope is excluded (unparsable runtime); Apollo 13 stays (runtime known)
    assert_eq!(
        titles(&catalog, ranked.iter().map(|c| c.movie_id)),
        vec!["The Godfather", "The Dark Knight", "Heat"]
    );
}

#[test]
fn test_ties_keep_catalog_order() {
    let catalog = larger_catalog();

    let filtered = filter_catalog(catalog.clone(), &query(&["Comedy", "Action"])).unwrap();
    let ranked = Ranker::new().rank(filtered, 5);

    // Toy Story, Amelie and Heat all rate 8.3 and appear in that order
    assert_eq!(
        titles(&catalog, ranked.iter().map(|c| c.movie_id)),
        vec!["The Dark Knight", "Toy Story", "Amelie", "Heat"]
    );
}
