//! A player's ordered set of picked movies.

use catalog::{Movie, MovieId};

/// Movies each player picks before rolling
pub const MOVIES_PER_PLAYER: usize = 3;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Added at this zero-based slot
    Added(usize),
    Removed,
    /// Set is full, nothing changed
    Rejected,
}

/// Ordered, duplicate-free, bounded list of movies
///
/// Insertion order is the numbering order: the first pick is slot 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieSelection {
    movies: Vec<Movie>,
}

impl MovieSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the movie, or deselect it if it is already selected
    ///
    /// A movie is identified by its catalog id, so two `Movie` values with
    /// the same id count as the same pick.
    pub fn toggle(&mut self, movie: &Movie) -> SelectionChange {
        if let Some(idx) = self.position_of(movie.id) {
            self.movies.remove(idx);
            return SelectionChange::Removed;
        }
        if self.is_complete() {
            return SelectionChange::Rejected;
        }
        self.movies.push(movie.clone());
        SelectionChange::Added(self.movies.len() - 1)
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.position_of(movie_id).is_some()
    }

    fn position_of(&self, movie_id: MovieId) -> Option<usize> {
        self.movies.iter().position(|m| m.id == movie_id)
    }

    pub fn is_complete(&self) -> bool {
        self.movies.len() >= MOVIES_PER_PLAYER
    }

    pub fn remaining(&self) -> usize {
        MOVIES_PER_PLAYER.saturating_sub(self.movies.len())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, slot: usize) -> Option<&Movie> {
        self.movies.get(slot)
    }

    pub fn clear(&mut self) {
        self.movies.clear();
    }
}
