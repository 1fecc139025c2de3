//! Error types for the discovery crate.
//!
//! Most catalog failures never reach the caller: a failed discover page is
//! skipped and a failed provider lookup becomes an empty list. What's left
//! here is the case where nothing at all could be fetched.

use catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Every discover page failed and so did the fallback search
    #[error("Discovery failed: all {pages} pages failed and the fallback search failed: {source}")]
    Exhausted {
        pages: usize,
        #[source]
        source: CatalogError,
    },

    /// A direct catalog call (e.g. a user search) failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Unknown decade '{0}' (try 1990s, 90s or all)")]
    UnknownDecade(String),

    #[error("Unknown streaming provider '{0}'")]
    UnknownProvider(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DiscoveryError>;
