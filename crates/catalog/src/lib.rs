//! # Catalog Crate
//!
//! Typed access to the TMDB movie catalog API.
//!
//! ## Main Components
//!
//! - **types**: Wire types (Movie, Genre, WatchProvider, paginated responses)
//! - **params**: Builder for `/discover/movie` query parameters
//! - **client**: `TmdbClient`, the bearer-authenticated HTTP client
//! - **traits**: `MovieCatalog`, the seam the discovery engine is written against
//! - **config**: `ClientConfig` (API key, base URL, timeout)
//! - **images**: Poster/backdrop/logo URL helpers
//! - **error**: Error types for catalog calls
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{ClientConfig, DiscoverParams, SortBy, TmdbClient};
//!
//! let client = TmdbClient::new(ClientConfig::from_env()?)?;
//!
//! let page = client
//!     .discover_movies(&DiscoverParams::new().sort_by(SortBy::PopularityAsc).page(2))
//!     .await?;
//!
//! for movie in &page.results {
//!     println!("{} - {:.1} stars", movie, movie.star_rating());
//! }
//! ```

// Public modules
pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod params;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use client::TmdbClient;
pub use config::ClientConfig;
pub use error::{CatalogError, Result};
pub use params::{DiscoverParams, MonetizationType, SortBy, TimeWindow};
pub use traits::MovieCatalog;
pub use types::{
    // Type aliases
    GenreId,
    MovieId,
    ProviderId,
    // Core types
    Genre,
    Movie,
    WatchProvider,
    // Responses
    AllWatchProvidersResponse,
    GenresResponse,
    RegionProviders,
    SearchResponse,
    WatchProvidersResponse,
};
