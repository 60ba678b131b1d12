use crate::catalog::Song;
use anyhow::Result;

/// Key under which the favorites list is persisted in the local store.
pub const FAVORITES_KEY: &str = "favoritos";

pub trait FavoritesStore: Send + Sync {
    /// Returns the persisted favorites list, in insertion order.
    /// A corrupt stored value is reset to an encoded empty list and an empty
    /// list is returned; decode failures never reach the caller.
    /// Returns Err only on storage errors.
    fn read_favorites(&self) -> Result<Vec<Song>>;

    /// Replaces the whole persisted list with a single atomic put.
    /// There are no partial or delta writes.
    fn write_favorites(&self, favorites: &[Song]) -> Result<()>;
}
