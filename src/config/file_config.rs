use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional overrides loaded from a TOML file. Anything left out falls back
/// to the defaults in `BrowserConfig`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub catalog_url: Option<String>,
    pub favorites_db_path: Option<String>,
    pub page_size: Option<usize>,
    pub debounce_ms: Option<u64>,
    pub install_prompt_delay_ms: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
