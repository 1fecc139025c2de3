//! The seam between the catalog client and its consumers.
//!
//! The discovery engine is written against `MovieCatalog` rather than the
//! concrete HTTP client, so tests can hand it an in-memory catalog.

use crate::error::Result;
use crate::params::DiscoverParams;
use crate::types::{GenresResponse, MovieId, SearchResponse, WatchProvidersResponse};
use async_trait::async_trait;

/// Read-only access to a movie catalog.
///
/// `Send + Sync` so one catalog can be shared across tasks behind an `Arc`.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Free-text title search
    async fn search_movies(&self, query: &str, page: u32) -> Result<SearchResponse>;

    /// Filtered, sorted browsing
    async fn discover_movies(&self, params: &DiscoverParams) -> Result<SearchResponse>;

    /// Where a movie can be watched, per region
    async fn movie_watch_providers(&self, movie_id: MovieId) -> Result<WatchProvidersResponse>;

    async fn genres(&self) -> Result<GenresResponse>;
}
