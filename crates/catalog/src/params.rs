//! Query parameters for the discover endpoint.
//!
//! `DiscoverParams` is a builder: every setter is optional and only the
//! parameters that were set end up in the query string.

use crate::types::{GenreId, ProviderId};
use std::fmt;

/// Result ordering accepted by `/discover/movie`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    ReleaseDateAsc,
    ReleaseDateDesc,
    VoteCountAsc,
    VoteCountDesc,
    OriginalTitleAsc,
    OriginalTitleDesc,
    PopularityAsc,
    PopularityDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::ReleaseDateAsc => "release_date.asc",
            SortBy::ReleaseDateDesc => "release_date.desc",
            SortBy::VoteCountAsc => "vote_count.asc",
            SortBy::VoteCountDesc => "vote_count.desc",
            SortBy::OriginalTitleAsc => "original_title.asc",
            SortBy::OriginalTitleDesc => "original_title.desc",
            SortBy::PopularityAsc => "popularity.asc",
            SortBy::PopularityDesc => "popularity.desc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a provider offers a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonetizationType {
    /// Included in a subscription
    Flatrate,
    Free,
    Ads,
    Rent,
    Buy,
}

impl MonetizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MonetizationType::Flatrate => "flatrate",
            MonetizationType::Free => "free",
            MonetizationType::Ads => "ads",
            MonetizationType::Rent => "rent",
            MonetizationType::Buy => "buy",
        }
    }
}

/// Window for the trending endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

/// Filters and paging for `/discover/movie`
///
/// ## Usage
/// ```ignore
/// let params = DiscoverParams::new()
///     .sort_by(SortBy::PopularityAsc)
///     .page(3)
///     .release_date_range("1990-01-01", "1999-12-31")
///     .vote_count_range(Some(10), Some(1000));
/// let page = client.discover_movies(&params).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverParams {
    pub genre: Option<GenreId>,
    pub year: Option<u16>,
    pub sort_by: Option<SortBy>,
    pub page: Option<u32>,
    /// `YYYY-MM-DD`
    pub primary_release_date_gte: Option<String>,
    /// `YYYY-MM-DD`
    pub primary_release_date_lte: Option<String>,
    pub vote_count_gte: Option<u32>,
    pub vote_count_lte: Option<u32>,
    pub popularity_lte: Option<f32>,
    pub with_watch_providers: Vec<ProviderId>,
    /// ISO 3166-1 country code
    pub watch_region: Option<String>,
    pub with_watch_monetization_types: Vec<MonetizationType>,
}

impl DiscoverParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genre(mut self, genre: GenreId) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Restrict to primary release dates within `[gte, lte]`
    pub fn release_date_range(mut self, gte: impl Into<String>, lte: impl Into<String>) -> Self {
        self.primary_release_date_gte = Some(gte.into());
        self.primary_release_date_lte = Some(lte.into());
        self
    }

    pub fn vote_count_range(mut self, gte: Option<u32>, lte: Option<u32>) -> Self {
        self.vote_count_gte = gte;
        self.vote_count_lte = lte;
        self
    }

    pub fn popularity_lte(mut self, popularity: f32) -> Self {
        self.popularity_lte = Some(popularity);
        self
    }

    /// Only movies offered by at least one of `providers` in `region`
    pub fn watch_providers(
        mut self,
        providers: &[ProviderId],
        region: impl Into<String>,
        monetization: &[MonetizationType],
    ) -> Self {
        self.with_watch_providers = providers.to_vec();
        self.watch_region = Some(region.into());
        self.with_watch_monetization_types = monetization.to_vec();
        self
    }

    /// Query pairs in TMDB's parameter names, unset fields skipped
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if let Some(genre) = self.genre {
            query.push(("with_genres", genre.to_string()));
        }
        if let Some(year) = self.year {
            query.push(("year", year.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            query.push(("sort_by", sort_by.as_str().to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(gte) = &self.primary_release_date_gte {
            query.push(("primary_release_date.gte", gte.clone()));
        }
        if let Some(lte) = &self.primary_release_date_lte {
            query.push(("primary_release_date.lte", lte.clone()));
        }
        if let Some(gte) = self.vote_count_gte {
            query.push(("vote_count.gte", gte.to_string()));
        }
        if let Some(lte) = self.vote_count_lte {
            query.push(("vote_count.lte", lte.to_string()));
        }
        if let Some(lte) = self.popularity_lte {
            query.push(("popularity.lte", lte.to_string()));
        }
        if !self.with_watch_providers.is_empty() {
            let ids = self
                .with_watch_providers
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            query.push(("with_watch_providers", ids));
        }
        if let Some(region) = &self.watch_region {
            query.push(("watch_region", region.clone()));
        }
        if !self.with_watch_monetization_types.is_empty() {
            let types = self
                .with_watch_monetization_types
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join("|");
            query.push(("with_watch_monetization_types", types));
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_empty_params_produce_empty_query() {
        assert!(DiscoverParams::new().to_query().is_empty());
    }

    #[test]
    fn test_full_discover_query() {
        let params = DiscoverParams::new()
            .sort_by(SortBy::VoteCountAsc)
            .page(7)
            .release_date_range("1990-01-01", "1999-12-31")
            .vote_count_range(Some(10), Some(1000))
            .popularity_lte(50.0)
            .watch_providers(&[8, 337], "US", &[MonetizationType::Flatrate]);

        let query = params.to_query();
        assert_eq!(value(&query, "sort_by"), Some("vote_count.asc"));
        assert_eq!(value(&query, "page"), Some("7"));
        assert_eq!(value(&query, "primary_release_date.gte"), Some("1990-01-01"));
        assert_eq!(value(&query, "primary_release_date.lte"), Some("1999-12-31"));
        assert_eq!(value(&query, "vote_count.gte"), Some("10"));
        assert_eq!(value(&query, "vote_count.lte"), Some("1000"));
        assert_eq!(value(&query, "popularity.lte"), Some("50"));
        assert_eq!(value(&query, "with_watch_providers"), Some("8,337"));
        assert_eq!(value(&query, "watch_region"), Some("US"));
        assert_eq!(value(&query, "with_watch_monetization_types"), Some("flatrate"));
        assert_eq!(value(&query, "with_genres"), None);
    }

    #[test]
    fn test_monetization_types_are_pipe_joined() {
        let params = DiscoverParams::new().watch_providers(
            &[15],
            "GB",
            &[MonetizationType::Flatrate, MonetizationType::Free],
        );
        let query = params.to_query();
        assert_eq!(value(&query, "with_watch_monetization_types"), Some("flatrate|free"));
    }

    #[test]
    fn test_sort_by_strings() {
        assert_eq!(SortBy::ReleaseDateDesc.to_string(), "release_date.desc");
        assert_eq!(SortBy::OriginalTitleAsc.as_str(), "original_title.asc");
        assert_eq!(SortBy::PopularityAsc.as_str(), "popularity.asc");
    }
}
