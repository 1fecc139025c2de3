//! Client-side release-decade filter.
//!
//! Text search has no date parameter, so fallback results are narrowed to
//! the requested decade after the fact.

use crate::config::DiscoveryQuery;
use crate::error::Result;
use crate::traits::Filter;
use catalog::Movie;

/// Keeps movies released within the query's decade.
///
/// ## Algorithm
/// 1. If the query is for all time, keep everything
/// 2. Otherwise keep movies whose release year falls in the decade;
///    movies without a parseable release date are dropped
pub struct DecadeFilter;

impl Filter for DecadeFilter {
    fn name(&self) -> &str {
        "DecadeFilter"
    }

    fn apply(&self, movies: Vec<Movie>, query: &DiscoveryQuery) -> Result<Vec<Movie>> {
        if query.decade.year_range().is_none() {
            return Ok(movies);
        }
        Ok(movies
            .into_iter()
            .filter(|movie| query.decade.contains(movie.release_year()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decade::Decade;
    use catalog::MovieId;

    fn movie(id: MovieId, release_date: &str) -> Movie {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Movie {id}"),
            "release_date": release_date,
        }))
        .unwrap()
    }

    #[test]
    fn test_keeps_only_decade() {
        let movies = vec![
            movie(1, "1989-12-31"),
            movie(2, "1990-01-01"),
            movie(3, "1999-06-15"),
            movie(4, "2000-01-01"),
            movie(5, ""),
        ];

        let filtered = DecadeFilter
            .apply(movies, &DiscoveryQuery::new(Decade::Nineties))
            .unwrap();

        let ids: Vec<MovieId> = filtered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_all_time_keeps_everything() {
        let movies = vec![movie(1, "1950-01-01"), movie(2, "")];
        let filtered = DecadeFilter
            .apply(movies, &DiscoveryQuery::new(Decade::AllTime))
            .unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
