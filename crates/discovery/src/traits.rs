//! Core traits for client-side filtering.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to fetched movie lists.

use crate::config::DiscoveryQuery;
use crate::error::Result;
use catalog::Movie;

/// Core trait for filtering movies after they come back from the catalog.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets the engine hold its pipeline across awaits
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    /// * `query` - The decade and providers the players asked for
    fn apply(&self, movies: Vec<Movie>, query: &DiscoveryQuery) -> Result<Vec<Movie>>;
}
