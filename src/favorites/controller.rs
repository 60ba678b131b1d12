use super::store::FavoritesStore;
use crate::catalog::{Catalog, Song};
use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

/// What a toggle request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Catalog not loaded yet, or the number is unknown. Logged, not an error.
    Ignored,
}

/// Membership toggling over the persisted favorites list.
///
/// Holds the working copy in memory and flushes the full list to the store
/// after every mutation. Favorites keep the whole `Song` snapshot so the
/// favorites view stays renderable even if the catalog source changes later.
pub struct FavoritesController {
    store: Arc<dyn FavoritesStore>,
    favorites: Vec<Song>,
}

impl FavoritesController {
    /// Loads the persisted list; a corrupt store has already been recovered
    /// to empty by the store itself.
    pub fn load(store: Arc<dyn FavoritesStore>) -> Result<FavoritesController> {
        let favorites = store.read_favorites()?;
        Ok(FavoritesController { store, favorites })
    }

    pub fn favorites(&self) -> &[Song] {
        &self.favorites
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_favorite(&self, number: i64) -> bool {
        self.favorites.iter().any(|song| song.number == number)
    }

    /// Flips membership of the song with the given number.
    ///
    /// Unknown numbers and a missing catalog are guarded no-ops. After a
    /// mutation the full list is persisted before returning.
    pub fn toggle(&mut self, catalog: Option<&Catalog>, number: i64) -> Result<ToggleOutcome> {
        let Some(catalog) = catalog else {
            warn!("Favorite toggle for song {number} before the catalog loaded, ignoring");
            return Ok(ToggleOutcome::Ignored);
        };
        let Some(song) = catalog.get(number) else {
            warn!("Favorite toggle for unknown song {number}, ignoring");
            return Ok(ToggleOutcome::Ignored);
        };

        let outcome = match self.favorites.iter().position(|fav| fav.number == number) {
            Some(index) => {
                self.favorites.remove(index);
                ToggleOutcome::Removed
            }
            None => {
                self.favorites.push(song.clone());
                ToggleOutcome::Added
            }
        };

        self.store.write_favorites(&self.favorites)?;
        Ok(outcome)
    }
}
