//! Common test infrastructure
//!
//! Spawns a local HTTP server for the static song list and builds browser
//! contexts backed by throwaway favorites databases. Tests should only
//! import from this module, not from internal submodules.

mod fixtures;
mod server;

pub use fixtures::{sample_songs, RecordingSink, TempFavorites};
pub use server::TestCatalogServer;

use songbook_browser::{BrowserConfig, BrowserContext};
use std::sync::Arc;

/// A context wired to the test server and a fresh temp store, with the
/// default page size overridden so pagination is exercisable with a handful
/// of songs.
pub fn build_context(server: &TestCatalogServer, favorites: &TempFavorites, page_size: usize) -> BrowserContext {
    songbook_browser::logging::init_tracing();
    let mut config = BrowserConfig::new(server.catalog_url(), favorites.db_path());
    config.page_size = page_size;
    BrowserContext::new(config, Arc::clone(&favorites.store)).unwrap()
}
