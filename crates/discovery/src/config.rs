//! Discovery tuning and the per-request query.
//!
//! Discovery deliberately digs past the blockbusters: random sort orders,
//! random pages and upper bounds on vote count and popularity. A streaming
//! filter shrinks the pool a lot, so those requests search wider and allow
//! better-known titles.

use crate::decade::Decade;
use crate::providers::ProviderSelection;
use catalog::{ProviderId, SortBy};
use std::time::Duration;

/// What the players asked for
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryQuery {
    pub decade: Decade,
    pub providers: ProviderSelection,
}

impl DiscoveryQuery {
    pub fn new(decade: Decade) -> Self {
        Self {
            decade,
            providers: ProviderSelection::new(),
        }
    }

    pub fn with_providers(mut self, ids: impl IntoIterator<Item = ProviderId>) -> Self {
        self.providers = ProviderSelection::from_ids(ids);
        self
    }

    pub fn has_streaming_filter(&self) -> bool {
        !self.providers.is_empty()
    }
}

/// Limits that differ between plain browsing and a streaming filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscoveryLimits {
    /// Discover requests per run
    pub pages: usize,
    pub max_vote_count: u32,
    pub max_popularity: f32,
    /// Movies kept after dedupe and shuffle
    pub sample_size: usize,
}

/// All knobs of the discovery engine
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryConfig {
    pub browse: DiscoveryLimits,
    pub streaming: DiscoveryLimits,
    /// Sort orders picked from at random, one per request
    pub sort_options: Vec<SortBy>,
    /// Pages are drawn from `1..=max_page`
    pub max_page: u32,
    pub min_vote_count: u32,
    /// Movies kept from the fallback search
    pub fallback_limit: usize,
    /// Movies kept from a user search
    pub search_limit: usize,
    /// Watch region for provider filters and enrichment
    pub region: String,
    pub provider_batch_size: usize,
    /// Pause between enrichment batches
    pub provider_batch_delay: Duration,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            browse: DiscoveryLimits {
                pages: 5,
                max_vote_count: 1000,
                max_popularity: 50.0,
                sample_size: 40,
            },
            streaming: DiscoveryLimits {
                pages: 10,
                max_vote_count: 5000,
                max_popularity: 200.0,
                sample_size: 60,
            },
            sort_options: vec![
                SortBy::ReleaseDateAsc,
                SortBy::ReleaseDateDesc,
                SortBy::VoteCountAsc,
                SortBy::OriginalTitleAsc,
                SortBy::OriginalTitleDesc,
                SortBy::PopularityAsc,
            ],
            max_page: 20,
            min_vote_count: 10,
            fallback_limit: 20,
            search_limit: 20,
            region: "US".to_string(),
            provider_batch_size: 5,
            provider_batch_delay: Duration::from_millis(100),
        }
    }
}

impl DiscoveryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limits_for(&self, query: &DiscoveryQuery) -> &DiscoveryLimits {
        if query.has_streaming_filter() {
            &self.streaming
        } else {
            &self.browse
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_browse_limits(mut self, limits: DiscoveryLimits) -> Self {
        self.browse = limits;
        self
    }

    pub fn with_streaming_limits(mut self, limits: DiscoveryLimits) -> Self {
        self.streaming = limits;
        self
    }

    /// An empty list falls back to popularity ascending
    pub fn with_sort_options(mut self, sort_options: Vec<SortBy>) -> Self {
        self.sort_options = sort_options;
        self
    }

    pub fn with_max_page(mut self, max_page: u32) -> Self {
        self.max_page = max_page.max(1);
        self
    }

    pub fn with_fallback_limit(mut self, limit: usize) -> Self {
        self.fallback_limit = limit;
        self
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn with_provider_batching(mut self, batch_size: usize, delay: Duration) -> Self {
        self.provider_batch_size = batch_size.max(1);
        self.provider_batch_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.browse.pages, 5);
        assert_eq!(config.streaming.pages, 10);
        assert_eq!(config.sort_options.len(), 6);
        assert!(!config.sort_options.contains(&SortBy::PopularityDesc));
        assert_eq!(config.provider_batch_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_limits_follow_streaming_filter() {
        let config = DiscoveryConfig::default();
        let browse = DiscoveryQuery::new(Decade::Eighties);
        let streaming = DiscoveryQuery::new(Decade::Eighties).with_providers([8]);

        assert_eq!(config.limits_for(&browse).sample_size, 40);
        assert_eq!(config.limits_for(&streaming).sample_size, 60);
        assert_eq!(config.limits_for(&streaming).max_vote_count, 5000);
    }

    #[test]
    fn test_builders_clamp() {
        let config = DiscoveryConfig::new()
            .with_max_page(0)
            .with_provider_batching(0, Duration::ZERO)
            .with_region("GB");
        assert_eq!(config.max_page, 1);
        assert_eq!(config.provider_batch_size, 1);
        assert_eq!(config.region, "GB");
    }
}
