use super::{Catalog, Song};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog request returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("catalog payload is not a valid song list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fetches the static song list exactly once per session.
///
/// The first successful `load` caches the parsed catalog; later calls return
/// the cached value without touching the network. A failed load caches
/// nothing, so the next call fetches again.
pub struct CatalogLoader {
    url: String,
    client: reqwest::Client,
    cache: OnceCell<Catalog>,
}

impl CatalogLoader {
    pub fn new<S: Into<String>>(url: S) -> CatalogLoader {
        CatalogLoader {
            url: url.into(),
            client: reqwest::Client::new(),
            cache: OnceCell::new(),
        }
    }

    pub async fn load(&self) -> Result<&Catalog, LoadError> {
        self.cache
            .get_or_try_init(|| fetch_catalog(&self.client, &self.url))
            .await
    }

    /// The already-loaded catalog, if any. `None` while the fetch is
    /// outstanding or after it failed.
    pub fn cached(&self) -> Option<&Catalog> {
        self.cache.get()
    }
}

async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<Catalog, LoadError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(LoadError::Status(response.status()));
    }
    let body = response.text().await?;
    let songs: Vec<Song> = serde_json::from_str(&body)?;
    info!("Catalog loaded with {} songs", songs.len());
    Ok(Catalog::new(songs))
}
