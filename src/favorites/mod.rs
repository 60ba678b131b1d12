mod controller;
mod schema;
mod sqlite_store;
mod store;

pub use controller::{FavoritesController, ToggleOutcome};
pub use sqlite_store::SqliteFavoritesStore;
pub use store::{FavoritesStore, FAVORITES_KEY};
