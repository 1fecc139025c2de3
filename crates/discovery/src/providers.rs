//! Streaming providers: the curated list, the player's selection, and the
//! per-movie lookup table filled in by enrichment.

use crate::error::{DiscoveryError, Result};
use catalog::{MovieId, ProviderId, WatchProvider};
use std::collections::HashMap;

/// A subscription service offered as a discovery filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingProvider {
    pub id: ProviderId,
    pub name: &'static str,
    pub logo_path: &'static str,
}

/// The services shown as filter chips, by TMDB provider id
pub const POPULAR_STREAMING_PROVIDERS: [StreamingProvider; 7] = [
    StreamingProvider {
        id: 8,
        name: "Netflix",
        logo_path: "/9A1JSVmSxsyaBK4SUFsYVqbAYfW.jpg",
    },
    StreamingProvider {
        id: 337,
        name: "Disney Plus",
        logo_path: "/7Fl8ylPDclt3ZYgNbW2t7rbZE9I.jpg",
    },
    StreamingProvider {
        id: 15,
        name: "Hulu",
        logo_path: "/zxrVdFjIjLqkfnwyghnfywTn3Lh.jpg",
    },
    StreamingProvider {
        id: 119,
        name: "Amazon Prime",
        logo_path: "/emthp39XA2YScoYL1p0sdbAH2WA.jpg",
    },
    StreamingProvider {
        id: 384,
        name: "HBO Max",
        logo_path: "/Ajqyt5aNxNGjmF9uOfxArGrdf3X.jpg",
    },
    StreamingProvider {
        id: 2,
        name: "Apple TV+",
        logo_path: "/peURlLlr8jggOwK53fJ5wdQl05y.jpg",
    },
    StreamingProvider {
        id: 531,
        name: "Paramount+",
        logo_path: "/xbhHa1YgtpwhC8lb1NQ3kb1NQ3ACVcLd.jpg",
    },
];

/// Curated provider by id
pub fn find_provider(id: ProviderId) -> Option<&'static StreamingProvider> {
    POPULAR_STREAMING_PROVIDERS.iter().find(|p| p.id == id)
}

/// Resolve a provider from user input: a numeric id or a curated name
///
/// Names match case-insensitively, ignoring spaces and `+`, so
/// `disney`, `Disney Plus` and `appletv` all work. Unknown numeric ids are
/// passed through since the catalog knows far more providers than we list.
pub fn resolve_provider(input: &str) -> Result<ProviderId> {
    let input = input.trim();
    if let Ok(id) = input.parse::<ProviderId>() {
        return Ok(id);
    }

    let needle = squash(input);
    if needle.is_empty() {
        return Err(DiscoveryError::UnknownProvider(input.to_string()));
    }
    POPULAR_STREAMING_PROVIDERS
        .iter()
        .find(|p| squash(p.name).starts_with(&needle))
        .map(|p| p.id)
        .ok_or_else(|| DiscoveryError::UnknownProvider(input.to_string()))
}

fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// =============================================================================
// Selection
// =============================================================================

/// Provider ids the players want to restrict discovery to
///
/// Empty means "no streaming filter". Order is the order ids were turned on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSelection {
    ids: Vec<ProviderId>,
}

impl ProviderSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicates collapse to the first occurrence
    pub fn from_ids(ids: impl IntoIterator<Item = ProviderId>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            if !selection.contains(id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    /// Turn a provider on or off; returns whether it is now selected
    pub fn toggle(&mut self, id: ProviderId) -> bool {
        if let Some(idx) = self.ids.iter().position(|&p| p == id) {
            self.ids.remove(idx);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: ProviderId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ProviderId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

// =============================================================================
// Lookup table
// =============================================================================

/// Flatrate providers per movie, as fetched by enrichment
///
/// A present-but-empty entry means "looked up, nothing found (or the lookup
/// failed)"; such movies are not fetched again.
#[derive(Debug, Clone, Default)]
pub struct ProviderLookup {
    entries: HashMap<MovieId, Vec<WatchProvider>>,
}

impl ProviderLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Providers for a movie; empty when unknown
    pub fn get(&self, movie_id: MovieId) -> &[WatchProvider] {
        self.entries
            .get(&movie_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.entries.contains_key(&movie_id)
    }

    pub fn insert(&mut self, movie_id: MovieId, providers: Vec<WatchProvider>) {
        self.entries.insert(movie_id, providers);
    }

    /// Entries from `other` overwrite ours
    pub fn merge(&mut self, other: ProviderLookup) {
        self.entries.extend(other.entries);
    }

    /// Ids not looked up yet, deduplicated, in input order
    pub fn missing(&self, movie_ids: impl IntoIterator<Item = MovieId>) -> Vec<MovieId> {
        let mut missing: Vec<MovieId> = Vec::new();
        for id in movie_ids {
            if !self.contains(id) && !missing.contains(&id) {
                missing.push(id);
            }
        }
        missing
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
