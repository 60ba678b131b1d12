use songbook_browser::{FavoritesStore, Song, SqliteFavoritesStore, ViewEvent, ViewSink};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// The fixture songbook served by the test catalog server.
pub fn sample_songs() -> Vec<Song> {
    vec![
        Song::new(101, "Açúcar", "Beth Carvalho", "Samba"),
        Song::new(102, "Evidências", "Chitãozinho & Xororó", "Sertanejo"),
        Song::new(103, "Garota de Ipanema", "Tom Jobim", "Bossa Nova"),
        Song::new(104, "Trem Bala", "Ana Vilela", "MPB"),
        Song::new(105, "Aquarela", "Toquinho", "MPB"),
    ]
}

/// A favorites database in a temp dir, dropped with the test.
pub struct TempFavorites {
    // Held so the directory outlives the store.
    _dir: TempDir,
    path: PathBuf,
    pub store: Arc<dyn FavoritesStore>,
}

impl TempFavorites {
    pub fn new() -> TempFavorites {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.db");
        let store: Arc<dyn FavoritesStore> = Arc::new(SqliteFavoritesStore::open(&path).unwrap());
        TempFavorites {
            _dir: dir,
            path,
            store,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.path.clone()
    }

    /// Reopens the same database file, as a fresh session would.
    pub fn reopen(&self) -> Arc<dyn FavoritesStore> {
        Arc::new(SqliteFavoritesStore::open(&self.path).unwrap())
    }
}

/// A view sink that records every event it receives.
#[derive(Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ViewSink for RecordingSink {
    fn on_view_event(&mut self, event: &ViewEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
