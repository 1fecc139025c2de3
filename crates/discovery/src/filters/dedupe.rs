//! Drops repeated movies.
//!
//! Different sort orders and pages of `/discover/movie` overlap, so the same
//! movie often comes back more than once.

use crate::config::DiscoveryQuery;
use crate::error::Result;
use crate::traits::Filter;
use catalog::{Movie, MovieId};
use std::collections::HashSet;

/// Keeps the first occurrence of each movie id.
///
/// ## Algorithm
/// 1. Walk the list in order, remembering seen ids
/// 2. Keep a movie only the first time its id is seen
pub struct DeduplicateFilter;

impl Filter for DeduplicateFilter {
    fn name(&self) -> &str {
        "DeduplicateFilter"
    }

    fn apply(&self, movies: Vec<Movie>, _query: &DiscoveryQuery) -> Result<Vec<Movie>> {
        let mut seen: HashSet<MovieId> = HashSet::with_capacity(movies.len());
        Ok(movies
            .into_iter()
            .filter(|movie| seen.insert(movie.id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, title: &str) -> Movie {
        serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let movies = vec![
            movie(1, "First"),
            movie(2, "Other"),
            movie(1, "Second"),
        ];

        let filtered = DeduplicateFilter
            .apply(movies, &DiscoveryQuery::default())
            .unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "First");
        assert_eq!(filtered[1].id, 2);
    }

    #[test]
    fn test_empty_input() {
        let filtered = DeduplicateFilter
            .apply(Vec::new(), &DiscoveryQuery::default())
            .unwrap();
        assert!(filtered.is_empty());
    }
}
