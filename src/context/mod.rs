mod events;

pub use events::{ViewEvent, ViewSink};

use crate::browse::{Pager, PaginationInfo};
use crate::catalog::{Catalog, CatalogLoader, LoadError, Song};
use crate::config::BrowserConfig;
use crate::favorites::{FavoritesController, FavoritesStore, ToggleOutcome};
use crate::search::{filter_catalog, SearchSummary};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, error};

/// User-visible status text shown when the catalog cannot be loaded.
pub const CATALOG_LOAD_FAILED_MESSAGE: &str = "Erro ao carregar o catálogo. Atualize a página.";

/// The application context: owns the catalog cache, the filtered view, the
/// pager and the favorites controller, and fans state changes out to the
/// registered view sinks.
///
/// All methods run on one logical execution context; until `load_catalog`
/// succeeds, filtering and favorite toggles are inert because the cache is
/// empty.
pub struct BrowserContext {
    config: BrowserConfig,
    loader: CatalogLoader,
    filtered: Vec<usize>,
    pager: Pager,
    summary: Option<SearchSummary>,
    favorites: FavoritesController,
    sinks: Vec<Box<dyn ViewSink>>,
}

impl BrowserContext {
    pub fn new(config: BrowserConfig, store: Arc<dyn FavoritesStore>) -> Result<BrowserContext> {
        let favorites = FavoritesController::load(store)?;
        let loader = CatalogLoader::new(config.catalog_url.clone());
        let pager = Pager::new(config.page_size);
        Ok(BrowserContext {
            config,
            loader,
            filtered: Vec::new(),
            pager,
            summary: None,
            favorites,
            sinks: Vec::new(),
        })
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn register_sink(&mut self, sink: Box<dyn ViewSink>) {
        self.sinks.push(sink);
    }

    /// Loads the catalog and initializes the filtered view to the full
    /// catalog, exactly once. Subsequent calls reuse the cached catalog.
    ///
    /// On failure nothing is cached; the failure event carries the retry
    /// message and the error is also returned to the caller.
    pub async fn load_catalog(&mut self) -> Result<(), LoadError> {
        let first_load = self.loader.cached().is_none();
        let catalog_len = match self.loader.load().await {
            Ok(catalog) => catalog.len(),
            Err(err) => {
                error!("Failed to load the catalog: {err}");
                self.notify(ViewEvent::CatalogLoadFailed {
                    message: CATALOG_LOAD_FAILED_MESSAGE.to_string(),
                });
                return Err(err);
            }
        };

        if first_load {
            self.filtered = (0..catalog_len).collect();
        }
        self.notify(ViewEvent::CatalogViewChanged);
        Ok(())
    }

    pub fn is_catalog_loaded(&self) -> bool {
        self.loader.cached().is_some()
    }

    /// Recomputes the filtered view for `query` and restarts pagination.
    /// Inert while the catalog is not loaded.
    pub fn apply_filter(&mut self, query: &str) {
        let outcome = match self.loader.cached() {
            Some(catalog) => filter_catalog(catalog, query),
            None => return,
        };
        self.filtered = outcome.view;
        self.summary = outcome.summary;
        self.pager.reset();
        self.notify(ViewEvent::CatalogViewChanged);
    }

    pub fn next_page(&mut self) {
        if self.pager.next(self.filtered.len()) {
            self.notify(ViewEvent::CatalogViewChanged);
        }
    }

    pub fn previous_page(&mut self) {
        if self.pager.previous() {
            self.notify(ViewEvent::CatalogViewChanged);
        }
    }

    /// Flips the favorite state of a song and notifies the badge counter,
    /// any favorites listing, and the catalog view. Guarded no-op for
    /// unknown numbers or an unloaded catalog.
    pub fn toggle_favorite(&mut self, number: i64) -> Result<()> {
        let outcome = self.favorites.toggle(self.loader.cached(), number)?;
        if outcome == ToggleOutcome::Ignored {
            return Ok(());
        }
        let count = self.favorites.count();
        self.notify(ViewEvent::FavoritesChanged { count });
        self.notify(ViewEvent::CatalogViewChanged);
        Ok(())
    }

    /// The songs belonging to the current page of the filtered view.
    pub fn page_songs(&self) -> Vec<&Song> {
        let Some(catalog) = self.loader.cached() else {
            return Vec::new();
        };
        self.pager
            .slice(&self.filtered)
            .iter()
            .map(|&index| &catalog.songs()[index])
            .collect()
    }

    pub fn pagination(&self) -> PaginationInfo {
        self.pager.info(self.filtered.len())
    }

    /// `None` while no filter is active; the indicator is hidden then.
    pub fn search_summary(&self) -> Option<&SearchSummary> {
        self.summary.as_ref()
    }

    pub fn favorites(&self) -> &[Song] {
        self.favorites.favorites()
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.count()
    }

    pub fn is_favorite(&self, number: i64) -> bool {
        self.favorites.is_favorite(number)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.loader.cached()
    }

    fn notify(&mut self, event: ViewEvent) {
        debug!("View event: {}", event.event_type());
        for sink in self.sinks.iter_mut() {
            sink.on_view_event(&event);
        }
    }
}
