//! Wire types for the movie catalog API.
//!
//! These mirror the JSON the TMDB v3 API returns. Fields that TMDB omits or
//! sends as `null` on some endpoints are `Option` or carry `#[serde(default)]`
//! so one struct can decode search, discover and detail responses alike.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Catalog identifier for a movie
pub type MovieId = u32;

/// Catalog identifier for a streaming/watch provider (Netflix is 8)
pub type ProviderId = u32;

/// Catalog identifier for a genre
pub type GenreId = u32;

// =============================================================================
// Movies
// =============================================================================

/// A movie as returned by the catalog.
///
/// Immutable record: the game and discovery layers clone it around but never
/// edit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// `YYYY-MM-DD`, or empty when the catalog has no date
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub video: bool,
}

impl Movie {
    /// Release year parsed from the leading `YYYY` of `release_date`
    ///
    /// Returns `None` for an empty or malformed date.
    pub fn release_year(&self) -> Option<u16> {
        let year = self.release_date.get(..4)?;
        year.parse().ok()
    }

    /// Rating on a five-star scale (the catalog votes out of ten)
    pub fn star_rating(&self) -> f32 {
        self.vote_average / 10.0 * 5.0
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.release_year() {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{}", self.title),
        }
    }
}

/// One page of movie results (search, discover, popular, trending)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

// =============================================================================
// Genres
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenresResponse {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

// =============================================================================
// Watch providers
// =============================================================================

/// A streaming/rental service that offers a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchProvider {
    #[serde(default)]
    pub display_priority: u32,
    #[serde(default)]
    pub logo_path: Option<String>,
    pub provider_id: ProviderId,
    pub provider_name: String,
}

/// Availability of one movie in one region, split by monetization type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionProviders {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Option<Vec<WatchProvider>>,
    #[serde(default)]
    pub rent: Option<Vec<WatchProvider>>,
    #[serde(default)]
    pub buy: Option<Vec<WatchProvider>>,
}

/// Per-movie provider lookup, keyed by ISO 3166-1 region code
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchProvidersResponse {
    #[serde(default)]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub results: HashMap<String, RegionProviders>,
}

impl WatchProvidersResponse {
    /// Subscription ("flatrate") providers for a region
    ///
    /// Returns an empty list when the region is missing or has no flatrate
    /// offers.
    pub fn flatrate_for(&self, region: &str) -> Vec<WatchProvider> {
        self.results
            .get(region)
            .and_then(|r| r.flatrate.clone())
            .unwrap_or_default()
    }
}

/// All providers the catalog knows for a region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllWatchProvidersResponse {
    #[serde(default)]
    pub results: Vec<WatchProvider>,
}
