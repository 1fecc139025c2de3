//! The discovery engine.
//!
//! ## Pipeline
//! 1. Plan N discover requests, each with a random sort order and page
//! 2. Fetch them one after another; a failing page is logged and skipped
//! 3. Dedupe, shuffle, truncate
//! 4. If every page failed, search for the decade's first year instead
//!
//! Enrichment is separate: the caller passes its lookup table and the engine
//! fills in whatever is missing, a few movies at a time.

use crate::config::{DiscoveryConfig, DiscoveryQuery};
use crate::decade::Decade;
use crate::error::{DiscoveryError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{DecadeFilter, DeduplicateFilter};
use crate::providers::ProviderLookup;
use catalog::{DiscoverParams, MonetizationType, Movie, MovieCatalog, MovieId, SortBy, WatchProvider};
use futures::future::join_all;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Where a discovery result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Discover { pages_ok: usize, pages_failed: usize },
    /// Every discover page failed; these are text-search results
    FallbackSearch,
}

#[derive(Debug, Clone)]
pub struct DiscoveryResult {
    pub movies: Vec<Movie>,
    pub source: ResultSource,
}

impl DiscoveryResult {
    pub fn is_fallback(&self) -> bool {
        self.source == ResultSource::FallbackSearch
    }
}

/// Finds candidate movies in a catalog
///
/// The RNG sits behind a mutex so every method takes `&self`; it is only
/// locked inside synchronous sections, never across an await.
pub struct DiscoveryEngine<C> {
    catalog: C,
    config: DiscoveryConfig,
    rng: Mutex<StdRng>,
    merge_pipeline: FilterPipeline,
    fallback_pipeline: FilterPipeline,
}

impl<C: MovieCatalog> DiscoveryEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            config: DiscoveryConfig::default(),
            rng: Mutex::new(StdRng::from_os_rng()),
            merge_pipeline: FilterPipeline::new().add_filter(DeduplicateFilter),
            fallback_pipeline: FilterPipeline::new()
                .add_filter(DeduplicateFilter)
                .add_filter(DecadeFilter),
        }
    }

    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    /// Same seed and same catalog answers give the same requests and order
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    fn with_rng<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }

    // =========================================================================
    // Discovery
    // =========================================================================

    /// The discover requests one run would make
    ///
    /// Each request gets its own random sort order and page, which is what
    /// keeps repeated runs from showing the same movies.
    pub fn plan_requests(&self, query: &DiscoveryQuery) -> Vec<DiscoverParams> {
        let limits = self.config.limits_for(query);
        let max_page = self.config.max_page.max(1);

        self.with_rng(|rng| {
            let mut requests = Vec::with_capacity(limits.pages);
            for _ in 0..limits.pages {
                let sort_by = self
                    .config
                    .sort_options
                    .choose(rng)
                    .copied()
                    .unwrap_or(SortBy::PopularityAsc);
                let page = rng.random_range(1..=max_page);

                let mut params = DiscoverParams::new()
                    .sort_by(sort_by)
                    .page(page)
                    .vote_count_range(Some(self.config.min_vote_count), Some(limits.max_vote_count))
                    .popularity_lte(limits.max_popularity);
                if let Some((gte, lte)) = query.decade.date_range() {
                    params = params.release_date_range(gte, lte);
                }
                if query.has_streaming_filter() {
                    params = params.watch_providers(
                        query.providers.ids(),
                        self.config.region.clone(),
                        &[MonetizationType::Flatrate],
                    );
                }
                requests.push(params);
            }
            requests
        })
    }

    /// Fetch a fresh random sample of movies for the query
    ///
    /// ## Errors
    /// Only when every discover page failed and the fallback search failed
    /// too.
    #[instrument(skip(self, query), fields(decade = %query.decade, streaming = query.has_streaming_filter()))]
    pub async fn discover(&self, query: &DiscoveryQuery) -> Result<DiscoveryResult> {
        let requests = self.plan_requests(query);
        let sample_size = self.config.limits_for(query).sample_size;

        let mut fetched = Vec::new();
        let mut pages_failed = 0;
        for params in &requests {
            match self.catalog.discover_movies(params).await {
                Ok(page) => {
                    debug!(
                        page = ?params.page,
                        sort_by = ?params.sort_by,
                        results = page.results.len(),
                        "Discover page fetched"
                    );
                    fetched.extend(page.results);
                }
                Err(e) => {
                    pages_failed += 1;
                    warn!(page = ?params.page, error = %e, "Discover page failed, skipping");
                }
            }
        }

        let pages_ok = requests.len() - pages_failed;
        if pages_ok == 0 {
            return self.fallback_search(query, requests.len()).await;
        }

        let mut movies = self.merge_pipeline.apply(fetched, query)?;
        self.shuffle(&mut movies);
        movies.truncate(sample_size);

        info!(
            movies = movies.len(),
            pages_ok, pages_failed, "Discovery complete"
        );
        Ok(DiscoveryResult {
            movies,
            source: ResultSource::Discover {
                pages_ok,
                pages_failed,
            },
        })
    }

    async fn fallback_search(&self, query: &DiscoveryQuery, pages: usize) -> Result<DiscoveryResult> {
        let text = query.decade.fallback_query();
        warn!(pages, query = %text, "All discover pages failed, falling back to search");

        let response = self
            .catalog
            .search_movies(&text, 1)
            .await
            .map_err(|source| DiscoveryError::Exhausted { pages, source })?;

        let mut movies = self.fallback_pipeline.apply(response.results, query)?;
        movies.truncate(self.config.fallback_limit);

        info!(movies = movies.len(), "Fallback search complete");
        Ok(DiscoveryResult {
            movies,
            source: ResultSource::FallbackSearch,
        })
    }

    /// Reorder a result list in place
    pub fn shuffle(&self, movies: &mut [Movie]) {
        self.with_rng(|rng| movies.shuffle(rng));
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Text search that favours the players' decade
    ///
    /// ## Algorithm
    /// 1. Blank text returns nothing without a request
    /// 2. Movies inside the decade come first
    /// 3. Within each group, least popular first
    /// 4. Truncate to the search limit
    #[instrument(skip(self))]
    pub async fn search(&self, text: &str, decade: Decade) -> Result<Vec<Movie>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let response = self.catalog.search_movies(text, 1).await?;
        let mut movies = response.results;
        movies.sort_by(|a, b| {
            let a_in = decade.contains(a.release_year());
            let b_in = decade.contains(b.release_year());
            b_in.cmp(&a_in)
                .then_with(|| a.popularity.total_cmp(&b.popularity))
        });
        movies.truncate(self.config.search_limit);

        debug!(results = movies.len(), "Search complete");
        Ok(movies)
    }

    // =========================================================================
    // Provider enrichment
    // =========================================================================

    /// Look up flatrate providers for every movie missing from `lookup`
    ///
    /// Lookups run concurrently within a batch, batches run one after
    /// another with a pause in between. A failed lookup is stored as an
    /// empty list so it isn't retried. Returns how many movies were looked
    /// up.
    #[instrument(skip_all, fields(movies = movies.len()))]
    pub async fn enrich_providers(&self, movies: &[Movie], lookup: &mut ProviderLookup) -> usize {
        let pending = lookup.missing(movies.iter().map(|m| m.id));
        if pending.is_empty() {
            debug!("All movies already have provider data");
            return 0;
        }

        let batch_size = self.config.provider_batch_size.max(1);
        let batch_count = pending.len().div_ceil(batch_size);
        let mut fetched = ProviderLookup::new();

        for (index, batch) in pending.chunks(batch_size).enumerate() {
            let results = join_all(batch.iter().map(|&id| self.flatrate_providers(id))).await;
            for (&id, providers) in batch.iter().zip(results) {
                fetched.insert(id, providers);
            }

            let delay = self.config.provider_batch_delay;
            if index + 1 < batch_count && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        lookup.merge(fetched);
        info!(looked_up = pending.len(), batches = batch_count, "Provider enrichment complete");
        pending.len()
    }

    async fn flatrate_providers(&self, movie_id: MovieId) -> Vec<WatchProvider> {
        match self.catalog.movie_watch_providers(movie_id).await {
            Ok(response) => response.flatrate_for(&self.config.region),
            Err(e) => {
                warn!(movie_id, error = %e, "Provider lookup failed, storing empty list");
                Vec::new()
            }
        }
    }
}
