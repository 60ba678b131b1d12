mod file_config;

pub use file_config::FileConfig;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: usize = 500;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_INSTALL_PROMPT_DELAY_MS: u64 = 5000;

/// Resolved configuration for a browser context.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// URL of the static song list resource.
    pub catalog_url: String,
    /// Path of the local favorites database.
    pub favorites_db_path: PathBuf,
    pub page_size: usize,
    pub debounce_ms: u64,
    pub install_prompt_delay_ms: u64,
}

impl BrowserConfig {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(
        catalog_url: S,
        favorites_db_path: P,
    ) -> BrowserConfig {
        BrowserConfig {
            catalog_url: catalog_url.into(),
            favorites_db_path: favorites_db_path.into(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            install_prompt_delay_ms: DEFAULT_INSTALL_PROMPT_DELAY_MS,
        }
    }

    /// Applies file overrides on top of the defaults.
    pub fn with_overrides(mut self, file: FileConfig) -> BrowserConfig {
        if let Some(catalog_url) = file.catalog_url {
            self.catalog_url = catalog_url;
        }
        if let Some(favorites_db_path) = file.favorites_db_path {
            self.favorites_db_path = PathBuf::from(favorites_db_path);
        }
        if let Some(page_size) = file.page_size {
            self.page_size = page_size;
        }
        if let Some(debounce_ms) = file.debounce_ms {
            self.debounce_ms = debounce_ms;
        }
        if let Some(install_prompt_delay_ms) = file.install_prompt_delay_ms {
            self.install_prompt_delay_ms = install_prompt_delay_ms;
        }
        self
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn install_prompt_delay(&self) -> Duration {
        Duration::from_millis(self.install_prompt_delay_ms)
    }
}
