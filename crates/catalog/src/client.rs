//! HTTP client for the TMDB v3 API.
//!
//! A thin request/response mapping: each method builds one GET request,
//! attaches the bearer credential, and decodes the JSON body into the types
//! in [`crate::types`]. No caching, no retries.

use crate::config::ClientConfig;
use crate::error::{CatalogError, Result};
use crate::params::{DiscoverParams, TimeWindow};
use crate::traits::MovieCatalog;
use crate::types::{
    AllWatchProvidersResponse, GenresResponse, Movie, MovieId, SearchResponse,
    WatchProvidersResponse,
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

/// Client for the movie catalog API.
///
/// Cloning is cheap: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl TmdbClient {
    /// Create a client from validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CatalogError::ClientBuild)?;
        Ok(Self { http, config })
    }

    /// Create a client from `TMDB_API_KEY` / `TMDB_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Issue a GET against `{base_url}{endpoint}` and decode the body
    ///
    /// Non-success statuses are logged with the response body and returned
    /// as [`CatalogError::Status`].
    #[instrument(skip(self, query), level = "debug")]
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!("GET {} ({} query params)", url, query.len());

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|source| {
                error!("Error fetching from catalog: {} ({})", source, url);
                CatalogError::Transport {
                    url: url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| CatalogError::Transport {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            error!(
                status = status.as_u16(),
                url = %url,
                body = %body,
                "Catalog API returned an error status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| {
            error!("Failed to decode catalog response from {}: {}", url, source);
            CatalogError::Decode { url, source }
        })
    }

    pub async fn search_movies(&self, query: &str, page: u32) -> Result<SearchResponse> {
        let params = [
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("include_adult", "false".to_string()),
        ];
        self.fetch("/search/movie", &params).await
    }

    pub async fn popular_movies(&self, page: u32) -> Result<SearchResponse> {
        self.fetch("/movie/popular", &[("page", page.to_string())]).await
    }

    pub async fn trending_movies(&self, window: TimeWindow) -> Result<SearchResponse> {
        self.fetch(&format!("/trending/movie/{}", window.as_str()), &[])
            .await
    }

    pub async fn movie_details(&self, movie_id: MovieId) -> Result<Movie> {
        self.fetch(&format!("/movie/{movie_id}"), &[]).await
    }

    pub async fn genres(&self) -> Result<GenresResponse> {
        self.fetch("/genre/movie/list", &[]).await
    }

    pub async fn movie_watch_providers(&self, movie_id: MovieId) -> Result<WatchProvidersResponse> {
        self.fetch(&format!("/movie/{movie_id}/watch/providers"), &[])
            .await
    }

    /// Every provider the catalog lists for a region
    pub async fn all_watch_providers(&self, region: &str) -> Result<AllWatchProvidersResponse> {
        self.fetch("/watch/providers/movie", &[("watch_region", region.to_string())])
            .await
    }

    pub async fn discover_movies(&self, params: &DiscoverParams) -> Result<SearchResponse> {
        self.fetch("/discover/movie", &params.to_query()).await
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> Result<SearchResponse> {
        TmdbClient::search_movies(self, query, page).await
    }

    async fn discover_movies(&self, params: &DiscoverParams) -> Result<SearchResponse> {
        TmdbClient::discover_movies(self, params).await
    }

    async fn movie_watch_providers(&self, movie_id: MovieId) -> Result<WatchProvidersResponse> {
        TmdbClient::movie_watch_providers(self, movie_id).await
    }

    async fn genres(&self) -> Result<GenresResponse> {
        TmdbClient::genres(self).await
    }
}
