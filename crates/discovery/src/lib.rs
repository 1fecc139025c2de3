//! Movie discovery on top of the catalog client.
//!
//! This crate provides:
//! - `DiscoveryEngine`: randomized multi-page discovery with a search
//!   fallback, decade-aware search, and streaming-provider enrichment
//! - `Decade` and the curated streaming providers the players filter by
//! - Filter trait and FilterPipeline for client-side filtering
//! - `DiscoveryConfig` holding every tuning constant
//!
//! ## Architecture
//! 1. The engine plans several discover requests with random sort orders
//!    and pages, so repeated runs surface different movies
//! 2. Results are merged and deduplicated by the filter pipeline
//! 3. The sample is shuffled and truncated
//! 4. Enrichment fills a caller-owned `ProviderLookup` in small batches
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{ClientConfig, TmdbClient};
//! use discovery::{Decade, DiscoveryEngine, DiscoveryQuery, ProviderLookup};
//!
//! let client = TmdbClient::new(ClientConfig::from_env()?)?;
//! let engine = DiscoveryEngine::new(client);
//!
//! let query = DiscoveryQuery::new(Decade::Nineties).with_providers([8, 337]);
//! let result = engine.discover(&query).await?;
//!
//! let mut lookup = ProviderLookup::new();
//! engine.enrich_providers(&result.movies, &mut lookup).await;
//! ```

pub mod config;
pub mod decade;
pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod providers;
pub mod traits;

// Re-export main types
pub use config::{DiscoveryConfig, DiscoveryLimits, DiscoveryQuery};
pub use decade::Decade;
pub use engine::{DiscoveryEngine, DiscoveryResult, ResultSource};
pub use error::{DiscoveryError, Result};
pub use filter_pipeline::FilterPipeline;
pub use providers::{
    POPULAR_STREAMING_PROVIDERS, ProviderLookup, ProviderSelection, StreamingProvider,
    find_provider, resolve_provider,
};
pub use traits::Filter;
