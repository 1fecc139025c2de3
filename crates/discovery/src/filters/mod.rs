//! Filter implementations for discovered movies.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline.

pub mod decade;
pub mod dedupe;

// Re-export for convenience
pub use decade::DecadeFilter;
pub use dedupe::DeduplicateFilter;
